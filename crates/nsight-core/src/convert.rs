// ── API-to-tree conversions and field normalization ──
//
// Bridges raw `nsight_api` records into output tree nodes. Both source
// modes funnel through these functions, so live and cache runs produce
// identically normalized values.

use chrono::{Local, TimeZone};
use tracing::warn;

use nsight_api::models::{AssetDetails, Server, Workstation};

use crate::tree::{DeviceDetail, ServerNode, WorkstationNode};

/// Map the raw 0/1 wire flag to a boolean. Anything other than 1 is
/// treated as offline.
pub fn is_online(raw: i64) -> bool {
    raw == 1
}

/// Render a raw epoch-seconds string as `DD.MM.YYYY HH:MM:SS` local time.
///
/// The dashboard uses `0` as a nil boot time; that, an empty value, and
/// an unparsable value all normalize to the empty string ("unknown"), the
/// last of them with a logged warning.
pub fn format_boot_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let Ok(timestamp) = raw.parse::<i64>() else {
        warn!(value = raw, "unparsable boot time, treating as unknown");
        return String::new();
    };
    if timestamp == 0 {
        return String::new();
    }
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(t) => t.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => {
            warn!(value = raw, "boot time out of range, treating as unknown");
            String::new()
        }
    }
}

/// Build a server node from a raw record and its optional asset bundle.
pub fn server_node(server: &Server, asset: Option<AssetDetails>) -> ServerNode {
    ServerNode {
        id: server.server_id,
        name: server.name.clone(),
        detail: DeviceDetail {
            online: is_online(server.online),
            os: server.os.clone(),
            ip: server.ip.clone(),
            user: server.user.clone(),
            manufacturer: server.manufacturer.clone(),
            model: server.model.clone(),
            serial_number: server.device_serial.clone(),
            last_boot_time: format_boot_time(&server.last_boot_time),
            asset,
        },
    }
}

/// Build a workstation node from a raw record and its optional asset bundle.
pub fn workstation_node(
    workstation: &Workstation,
    asset: Option<AssetDetails>,
) -> WorkstationNode {
    WorkstationNode {
        id: workstation.workstation_id,
        name: workstation.name.clone(),
        detail: DeviceDetail {
            online: is_online(workstation.online),
            os: workstation.os.clone(),
            ip: workstation.ip.clone(),
            user: workstation.user.clone(),
            manufacturer: workstation.manufacturer.clone(),
            model: workstation.model.clone(),
            serial_number: workstation.device_serial.clone(),
            last_boot_time: format_boot_time(&workstation.last_boot_time),
            asset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_only_for_raw_one() {
        assert!(is_online(1));
        assert!(!is_online(0));
        assert!(!is_online(2));
        assert!(!is_online(-1));
    }

    #[test]
    fn nil_boot_times_are_empty() {
        assert_eq!(format_boot_time(""), "");
        assert_eq!(format_boot_time("0"), "");
    }

    #[test]
    fn unparsable_boot_time_is_empty() {
        assert_eq!(format_boot_time("abc"), "");
        assert_eq!(format_boot_time("12.5"), "");
    }

    #[test]
    fn boot_time_renders_local_time() {
        let ts = 1_718_445_000_i64;
        let expected = Local
            .timestamp_opt(ts, 0)
            .single()
            .expect("valid timestamp")
            .format("%d.%m.%Y %H:%M:%S")
            .to_string();
        assert_eq!(format_boot_time("1718445000"), expected);
        // Sanity on the shape: DD.MM.YYYY HH:MM:SS
        assert_eq!(expected.len(), 19);
        assert_eq!(&expected[2..3], ".");
        assert_eq!(&expected[5..6], ".");
    }

    #[test]
    fn server_node_normalizes_fields() {
        let server = Server {
            server_id: 100,
            name: "web-01".into(),
            description: String::new(),
            os: "Linux".into(),
            ip: "10.0.0.5".into(),
            online: 1,
            user: String::new(),
            manufacturer: String::new(),
            model: String::new(),
            device_serial: "SN1".into(),
            last_boot_time: "0".into(),
        };
        let node = server_node(&server, None);
        assert_eq!(node.id, 100);
        assert!(node.detail.online);
        assert_eq!(node.detail.last_boot_time, "");
        assert_eq!(node.detail.serial_number, "SN1");
        assert!(node.detail.asset.is_none());
    }
}
