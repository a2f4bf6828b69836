pub mod gateway;
pub mod metrics;
pub mod order_builder;
pub mod razorpay;

pub use gateway::{GatewayError, PaymentGateway};
pub use self::metrics::{get_metrics, init_metrics};
pub use order_builder::{build_order_payload, ValidationError};
pub use razorpay::RazorpayClient;
