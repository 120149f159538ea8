pub mod route_state;
