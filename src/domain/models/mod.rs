pub mod delivery;
pub mod receipt;
pub mod transaction;

pub use delivery::{DeliveryErrorKind, DeliveryOutcome};
pub use receipt::{ReceiptField, ReceiptLine, RenderedReceipt};
pub use transaction::{TransactionRequest, ValidTransaction, should_include_pump};
