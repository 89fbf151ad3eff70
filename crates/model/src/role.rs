use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoEnumIterator as _};

use crate::errors::ModelError;

/// Dashboard role selected at login. The selector is client-side only;
/// nothing verifies or enforces it.
#[derive(FromRepr, EnumIter, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Role {
    Admin,
    Mcmc,
    Dusp,
    Sso,
    Staff,
    TechPartner,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mcmc => "mcmc",
            Role::Dusp => "dusp",
            Role::Sso => "sso",
            Role::Staff => "staff",
            Role::TechPartner => "tp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Mcmc => "MCMC",
            Role::Dusp => "DUSP",
            Role::Sso => "SSO",
            Role::Staff => "Staff",
            Role::TechPartner => "Technology Partner",
        }
    }

    pub fn list() -> Vec<Role> {
        Role::iter().collect()
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<&str> for Role {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Role::iter()
            .find(|role| role.name() == value.to_lowercase())
            .ok_or_else(|| ModelError::UnknownRole(value.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_role() {
        assert_eq!(Role::try_from("admin").unwrap(), Role::Admin);
        assert_eq!(Role::try_from("TP").unwrap(), Role::TechPartner);
        assert!(Role::try_from("superuser").is_err());
    }

    #[test]
    fn roles_are_stable() {
        assert_eq!(Role::list().len(), 6);
        assert_eq!(Role::Admin.id(), 0);
        assert_eq!(Role::from_repr(5), Some(Role::TechPartner));
    }
}
