// Middleware modules for Urlscope Backend

pub mod cors;

pub use cors::dynamic_cors_middleware;
