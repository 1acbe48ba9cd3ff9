pub mod medals_api;
