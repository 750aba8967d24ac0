//! A Library for Writing Serverless Functions Against Trigger and Output Bindings
//!
//! The host runtime populates one binding per trigger (HTTP request, timer, queue message or
//! blob) plus an invocation [Context] right before calling user code. User code only sees the
//! traits in this crate; the structs next to them are in-memory implementations that a host, or a
//! test, can fill in.
//!
//! ```rust
//! use functions::{Context, InvocationContext, Message, Out, OutSlot, QueueMessage};
//!
//! fn count_orders(
//!     msg: &dyn QueueMessage,
//!     ctx: &dyn Context,
//!     out: &mut dyn Out<String>,
//! ) -> functions::Result<()> {
//!     let order = msg.get_json()?;
//!     out.set(format!("{} saw order {}", ctx.function_name(), order["id"]));
//!     Ok(())
//! }
//!
//! let dir = std::env::temp_dir().to_string_lossy().into_owned();
//! let ctx = InvocationContext::new("0f8fad5b", "count_orders", dir).unwrap();
//! let msg = Message::new(r#"{"id": 7}"#).with_dequeue_count(1);
//! let mut out: OutSlot<String> = OutSlot::new();
//!
//! count_orders(&msg, &ctx, &mut out).unwrap();
//! assert_eq!(out.get().unwrap(), "count_orders saw order 7");
//! ```

#[macro_use]
extern crate lazy_static;

pub mod blob;
pub mod context;
pub mod error;
pub mod http;
pub mod out;
pub mod queue;
pub mod timer;
pub mod types;

pub use crate::blob::{Blob, InputStream};
pub use crate::context::{Context, InvocationContext};
pub use crate::error::{decode_json, decode_json_as, BindingError, Result};
pub use crate::http::{HttpRequest, HttpResponse, Request, Response};
pub use crate::out::{Out, OutSlot};
pub use crate::queue::{Message, QueueBody, QueueMessage};
pub use crate::timer::{Timer, TimerRequest};
pub use crate::types::{Body, Headers, Params, Timestamp};

lazy_static! {
    // environment variables

    /// The value of the `FUNC_HANDLER` environment variable
    ///
    /// This variable usually isn't used directly and is accessed indirectly via
    /// [InvocationContext::from_env]
    pub static ref FUNC_HANDLER : Option<String> = std::env::var("FUNC_HANDLER").ok();

    /// The value of the `FUNC_DIRECTORY` environment variable
    pub static ref FUNC_DIRECTORY : Option<String> = std::env::var("FUNC_DIRECTORY")
        .ok()
        .filter(|dir| !dir.is_empty());
}
