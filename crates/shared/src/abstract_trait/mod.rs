pub mod cipher;
pub mod payment;
