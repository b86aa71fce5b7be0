pub mod contact;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod typing;
