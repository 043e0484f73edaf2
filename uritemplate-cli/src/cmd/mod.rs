pub mod expand;
pub mod lint;
pub mod vars;
