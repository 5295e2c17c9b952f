pub mod api_ratelimit;
pub mod errors;
pub mod format;
pub mod page;
pub mod ratelimit;
pub mod table;

pub use errors::user_message;
pub use format::format_thousands;
pub use page::Page;
pub use ratelimit::{check_cooldown, check_global_rate_limit, get_cooldown_seconds};
pub use table::Table;
