pub mod protected;
pub mod root;
pub mod status;
pub mod user_status;
