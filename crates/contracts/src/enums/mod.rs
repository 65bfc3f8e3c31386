pub mod order_status;
pub mod viewer_role;
