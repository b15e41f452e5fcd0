pub mod hashset_blacklist;
pub mod redis_blacklist;

pub use hashset_blacklist::HashSetBlacklist;
pub use redis_blacklist::{RedisBlacklist, connect as connect_redis};
