use crate::api::routes;
use crate::service::FreelanceCrew;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `crew` - Crew executing the requested runs
///
/// # Returns
/// * `std::io::Result<()>` - Error if the port cannot be bound or the server stops abnormally
pub async fn launch_server(port: u16, crew: FreelanceCrew) -> std::io::Result<()> {
    let app = routes::app(Arc::new(crew));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on {}", addr);
    axum::serve(listener, app).await
}
