mod rest_movie;
mod rest_reference;
mod server_health;
