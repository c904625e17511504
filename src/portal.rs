// SPDX-License-Identifier: GPL-3.0-only

//! Camera access brokering via the XDG desktop portal
//!
//! Uses `org.freedesktop.portal.Camera` on the session bus, which works in
//! both native and Flatpak environments. When no portal is reachable the app
//! falls back to granted: the built-in synthetic device needs no privileged
//! access, so a missing portal should not brick the session.

use std::collections::HashMap;

use futures::StreamExt;
use tracing::{debug, info, warn};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::capture::PermissionStatus;

const PORTAL_DEST: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const CAMERA_IFACE: &str = "org.freedesktop.portal.Camera";
const REQUEST_IFACE: &str = "org.freedesktop.portal.Request";

/// Portal response code for a granted request
const RESPONSE_GRANTED: u32 = 0;

/// Resolve camera access for this session
///
/// Portal answers are honored as granted/denied; an unreachable portal
/// resolves to granted with a warning log.
pub async fn request_camera_access() -> PermissionStatus {
    match access_camera().await {
        Ok(true) => {
            info!("Camera access granted via portal");
            PermissionStatus::Granted
        }
        Ok(false) => {
            info!("Camera access denied via portal");
            PermissionStatus::Denied
        }
        Err(err) => {
            warn!(
                error = %err,
                "Camera portal unreachable, continuing without it"
            );
            PermissionStatus::Granted
        }
    }
}

/// Ask the portal for camera access and wait for the user's answer
async fn access_camera() -> Result<bool, String> {
    // Connect to the session bus
    let connection = zbus::Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session D-Bus: {}", e))?;

    let camera_proxy = zbus::Proxy::new(&connection, PORTAL_DEST, PORTAL_PATH, CAMERA_IFACE)
        .await
        .map_err(|e| format!("Failed to create camera portal proxy: {}", e))?;

    // Purely diagnostic; permission is not gated on hardware presence
    let camera_present: bool = camera_proxy
        .get_property("IsCameraPresent")
        .await
        .unwrap_or(false);
    debug!(camera_present, "Queried camera portal");

    // Pre-compute the request object path from our handle token so the
    // Response signal can be subscribed before the call races it
    let token = format!("viewfinder_{}", uuid::Uuid::new_v4().simple());
    let expected_path = request_path(&connection, &token)?;

    let request_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DEST,
        expected_path.as_str(),
        REQUEST_IFACE,
    )
    .await
    .map_err(|e| format!("Failed to create request proxy: {}", e))?;

    let mut responses = request_proxy
        .receive_signal("Response")
        .await
        .map_err(|e| format!("Failed to subscribe to portal response: {}", e))?;

    let mut options: HashMap<&str, Value> = HashMap::new();
    options.insert("handle_token", Value::new(token.as_str()));

    let handle: OwnedObjectPath = camera_proxy
        .call("AccessCamera", &(options,))
        .await
        .map_err(|e| format!("AccessCamera call failed: {}", e))?;

    // Older portals ignore the handle token; follow the returned handle
    if handle.as_str() != expected_path {
        debug!(handle = %handle, "Portal returned a different request handle");
        let request_proxy =
            zbus::Proxy::new(&connection, PORTAL_DEST, handle.as_str(), REQUEST_IFACE)
                .await
                .map_err(|e| format!("Failed to create request proxy: {}", e))?;
        responses = request_proxy
            .receive_signal("Response")
            .await
            .map_err(|e| format!("Failed to subscribe to portal response: {}", e))?;
    }

    let message = responses
        .next()
        .await
        .ok_or_else(|| "Portal response stream closed".to_string())?;

    let (code, _results): (u32, HashMap<String, OwnedValue>) = message
        .body()
        .deserialize()
        .map_err(|e| format!("Malformed portal response: {}", e))?;

    Ok(code == RESPONSE_GRANTED)
}

/// Build the request object path the portal derives from our connection name
/// and handle token
fn request_path(connection: &zbus::Connection, token: &str) -> Result<String, String> {
    let unique = connection
        .unique_name()
        .ok_or_else(|| "Connection has no unique name".to_string())?;
    let sender = unique.trim_start_matches(':').replace('.', "_");
    Ok(format!("{}/request/{}/{}", PORTAL_PATH, sender, token))
}
