//! Customer record and the customer/company join row.

use super::company::{Company, CompanyId};
use super::Quoted;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned `Customers.customer_id`.
pub type CustomerId = i64;

/// One row of the `Customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub surname: String,
    /// Referenced company; not guaranteed to exist.
    pub company_id: CompanyId,
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.customer_id,
            Quoted(&self.name),
            Quoted(&self.surname),
            self.company_id
        )
    }
}

/// One row of the inner join between `Customers` and `Companies`.
///
/// `customer.company_id == company.company_id` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCompany {
    pub customer: Customer,
    pub company: Company,
}

impl Display for CustomerCompany {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let customer = &self.customer;
        let company = &self.company;
        write!(
            f,
            "({}, {}, {}, {}, {}, {}, {})",
            customer.customer_id,
            Quoted(&customer.name),
            Quoted(&customer.surname),
            customer.company_id,
            company.company_id,
            Quoted(&company.name),
            Quoted(&company.address)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerCompany};
    use crate::model::company::Company;

    #[test]
    fn join_row_renders_customer_columns_then_company_columns() {
        let row = CustomerCompany {
            customer: Customer {
                customer_id: 7,
                name: "Petras".to_string(),
                surname: "Jonaitis".to_string(),
                company_id: 2,
            },
            company: Company {
                company_id: 2,
                name: "IBM".to_string(),
                address: "Miško 12".to_string(),
            },
        };

        assert_eq!(
            row.to_string(),
            "(7, 'Petras', 'Jonaitis', 2, 2, 'IBM', 'Miško 12')"
        );
        assert_eq!(row.customer.to_string(), "(7, 'Petras', 'Jonaitis', 2)");
        assert_eq!(row.company.to_string(), "(2, 'IBM', 'Miško 12')");
    }

    #[test]
    fn quotes_and_backslashes_in_text_are_escaped() {
        let customer = Customer {
            customer_id: 1,
            name: "O'Neil".to_string(),
            surname: r"Back\slash".to_string(),
            company_id: 3,
        };
        let company = Company {
            company_id: 3,
            name: "Kelly's".to_string(),
            address: "Main St".to_string(),
        };

        assert_eq!(customer.to_string(), r"(1, 'O\'Neil', 'Back\\slash', 3)");
        assert_eq!(company.to_string(), r"(3, 'Kelly\'s', 'Main St')");
    }
}
