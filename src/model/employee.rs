use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

impl Employee {
    /// Case-insensitive substring match on id, name, department or email.
    /// A blank term matches everyone.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [
            &self.employee_id,
            &self.full_name,
            &self.department,
            &self.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

pub fn search_employees(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    employees.into_iter().filter(|e| e.matches(term)).collect()
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john@email.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl CreateEmployee {
    /// Returns the first problem found, worded for the caller.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("employee_id", &self.employee_id),
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("department", &self.department),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(format!("{} is required", name));
        }

        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid_email {
            return Err("Invalid email format".to_string());
        }
        Ok(())
    }
}
