//! Entity module - SeaORM definitions for the three portal tables.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod financial_data;
pub mod media_file;
pub mod user;

// Re-export specific types to avoid conflicts
pub use financial_data::{
    Column as FinancialDataColumn, Entity as FinancialData, FundType,
    Model as FinancialDataModel,
};
pub use media_file::{
    Column as MediaFileColumn, Entity as MediaFile, MediaKind, Model as MediaFileModel,
};
pub use user::{Column as UserColumn, Entity as User, Interests, Model as UserModel, Role};
