pub mod access;
pub mod findings;
pub mod protection;
pub mod section;
pub mod subscription;

pub use access::*;
pub use findings::*;
pub use protection::*;
pub use section::*;
pub use subscription::*;
