//! Observer entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::observer::AccountType;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for account_type that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "account_type")]
pub enum AccountTypeDb {
    #[sqlx(rename = "Facebook")]
    Facebook,
    #[sqlx(rename = "G+")]
    GooglePlus,
}

impl From<AccountTypeDb> for AccountType {
    fn from(db: AccountTypeDb) -> Self {
        match db {
            AccountTypeDb::Facebook => AccountType::Facebook,
            AccountTypeDb::GooglePlus => AccountType::GooglePlus,
        }
    }
}

impl From<AccountType> for AccountTypeDb {
    fn from(t: AccountType) -> Self {
        match t {
            AccountType::Facebook => AccountTypeDb::Facebook,
            AccountType::GooglePlus => AccountTypeDb::GooglePlus,
        }
    }
}

/// Database row mapping for the observers table.
#[derive(Debug, Clone, FromRow)]
pub struct ObserverEntity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: i32,
    pub account_type: AccountTypeDb,
    pub installation_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<ObserverEntity> for domain::models::Observer {
    fn from(entity: ObserverEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            age: entity.age,
            account_type: entity.account_type.into(),
            installation_id: entity.installation_id,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_db_round_trip() {
        for t in [AccountType::Facebook, AccountType::GooglePlus] {
            let db: AccountTypeDb = t.into();
            let back: AccountType = db.into();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn test_entity_to_model_conversion() {
        let entity = ObserverEntity {
            id: Uuid::new_v4(),
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            age: 29,
            account_type: AccountTypeDb::GooglePlus,
            installation_id: "parse-abc123".to_string(),
            created_at: Utc::now(),
        };
        let model: domain::models::Observer = entity.clone().into();
        assert_eq!(model.id, entity.id);
        assert_eq!(model.email, "ana@example.com");
        assert_eq!(model.account_type, AccountType::GooglePlus);
    }
}
