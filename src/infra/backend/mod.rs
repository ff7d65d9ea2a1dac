pub mod http_backend_client;
