//! Photo service (Unsplash) HTTP client
//! 图片服务（Unsplash）HTTP 客户端

mod client;

pub use client::{UnsplashClient, DEFAULT_API_URL};
