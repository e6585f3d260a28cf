use serde::{Deserialize, Serialize};

/// Роль пользователя в демонстрационной авторизации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Vendor,
    Technical,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::Vendor, Self::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Vendor => "vendor",
            Self::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "SCM Admin",
            Self::Vendor => "Vendor",
            Self::Technical => "Tim Teknis",
        }
    }

    /// Отображаемое имя, инициалы и организация
    fn profile(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Admin => ("System Administrator", "AD", "SKK Migas - SCM"),
            Self::Vendor => ("Global Suppliers Ltd.", "GS", "Global Suppliers Ltd."),
            Self::Technical => ("Chief Engineer", "TE", "SKK Migas - Teknis"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl UserInfo {
    /// Пользователь для входа без пароля: профиль определяется ролью
    pub fn simulated(id: impl Into<String>, email: &str, role: UserRole) -> Self {
        let (name, avatar, company) = role.profile();
        Self {
            id: id.into(),
            name: name.to_string(),
            email: email.trim().to_string(),
            role,
            avatar: avatar.to_string(),
            company: Some(company.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_follows_role() {
        let vendor = UserInfo::simulated("1", " vendor@mail.com ", UserRole::Vendor);
        assert_eq!(vendor.name, "Global Suppliers Ltd.");
        assert_eq!(vendor.avatar, "GS");
        assert_eq!(vendor.email, "vendor@mail.com");
        assert!(!vendor.is_admin());
        assert!(UserInfo::simulated("2", "a@b.c", UserRole::Admin).is_admin());
    }

    #[test]
    fn role_wire_names() {
        let req: LoginRequest = serde_json::from_str(r#"{"email":"t@skk.go.id","role":"technical"}"#).unwrap();
        assert_eq!(req.role, UserRole::Technical);
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }
}
