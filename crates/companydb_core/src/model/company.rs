//! Company record.

use super::Quoted;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned `Companies.company_id`.
pub type CompanyId = i64;

/// One row of the `Companies` table.
///
/// `name` is not unique; several companies may share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: CompanyId,
    pub name: String,
    pub address: String,
}

impl Display for Company {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.company_id,
            Quoted(&self.name),
            Quoted(&self.address)
        )
    }
}
