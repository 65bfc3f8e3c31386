pub mod a025_refund_request;
