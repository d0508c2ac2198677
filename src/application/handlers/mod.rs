pub mod receipt_dispatcher;
