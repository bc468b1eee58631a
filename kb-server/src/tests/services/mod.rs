mod api_key;
mod chat;
