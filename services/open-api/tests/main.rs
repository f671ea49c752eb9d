mod client;
mod config;
mod live;
mod signing;
