mod api;
mod services;
