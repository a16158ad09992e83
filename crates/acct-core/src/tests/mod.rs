mod models;
mod response_fields;
