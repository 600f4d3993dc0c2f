use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{refresh_folded, require_non_empty};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Lowercased `name`, kept in step on every save. Searches match against it.
    pub name_folded: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        require_non_empty(&self.name, "name")?;
        require_non_empty(&self.city, "city")?;
        require_non_empty(&self.state, "state")?;
        require_non_empty(&self.address, "address")?;
        require_non_empty(&self.phone, "phone")?;
        refresh_folded(&self.name, &mut self.name_folded);
        Ok(self)
    }
}
