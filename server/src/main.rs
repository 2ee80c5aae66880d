use server::registry::Registry;
use server::routes;
use std::net::SocketAddr;

/// Address used when none is given on the command line.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addrstr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
    let addr: SocketAddr = match addrstr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Cannot parse the address {addrstr}: {e}");
            return;
        }
    };
    let api = routes::api(Registry::default());

    log::info!("Listening on http://{addr}");
    let server = warp::serve(api).run(addr);
    server.await;
}
