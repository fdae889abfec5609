//! User Record
//!
//! Users listed under Security → Create User. The password is collected by
//! the form but never displayed.

use super::entity::{Editable, Record};
use super::field::{Draft, FieldKind, FieldSpec};

pub const USER_ROLES: &[&str] = &["Admin", "Manager", "Operator"];

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub user_name: String,
    pub employee_name: String,
    pub email: String,
    pub mobile_no: String,
    pub role: String,
    pub password: String,
    pub active: bool,
}

impl User {
    pub fn new(id: u32, user_name: &str, email: &str, mobile_no: &str) -> Self {
        Self {
            id,
            user_name: user_name.to_string(),
            employee_name: String::new(),
            email: email.to_string(),
            mobile_no: mobile_no.to_string(),
            role: "Admin".to_string(),
            password: String::new(),
            active: true,
        }
    }
}

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("user_name", "User Name").required().searchable(),
    FieldSpec::text("employee_name", "Employee Name").hidden(),
    FieldSpec::text("email", "Email").required().searchable(),
    FieldSpec::text("mobile_no", "Mobile No").searchable(),
    FieldSpec::choice("role", "Role", USER_ROLES).required().with_default("Operator"),
    FieldSpec::new("password", "Password", FieldKind::Password).required().hidden(),
    FieldSpec::new("active", "Active", FieldKind::Flag).with_default("true"),
];

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        USER_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "user_name" => self.user_name.clone(),
            "employee_name" => self.employee_name.clone(),
            "email" => self.email.clone(),
            "mobile_no" => self.mobile_no.clone(),
            "role" => self.role.clone(),
            "password" => self.password.clone(),
            "active" => self.active.to_string(),
            _ => String::new(),
        }
    }
}

impl Editable for User {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            user_name: draft.text("user_name"),
            employee_name: draft.text("employee_name"),
            email: draft.text("email"),
            mobile_no: draft.text("mobile_no"),
            role: draft.text("role"),
            // passwords keep surrounding whitespace
            password: draft.get("password").to_string(),
            active: draft.flag("active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_a_column() {
        assert!(User::columns().iter().all(|spec| spec.key != "password"));
    }

    #[test]
    fn test_user_search_by_email() {
        let user = User::new(3, "Milton", "milton@gmail.com", "01710957249");
        assert!(user.matches("milton@"));
        assert!(user.matches("0171095"));
    }
}
