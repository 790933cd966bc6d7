//! Replay a saved switch session through the collector and report sinks
//!
//! Uses unfiltered captures, so the include filters of the default
//! commands are exercised too.

use std::fs;
use std::io::Write;

use macmap::csv_sink::CsvReportSink;
use macmap::json_sink::JsonReportSink;
use macmap::oui_table::OuiTable;
use macmap::replay::ReplayExecutor;
use macmap_core::{CollectError, Collector, CorrelationSummary, ReportSink, SessionCommands};
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, TempDir};

const MAC_CAPTURE: &str = "\
          Mac Address Table
-------------------------------------------

Vlan    Mac Address       Type        Ports
----    -----------       --------    -----
 All    0100.0ccc.cccc    STATIC      CPU
  10    0050.56ab.0001    DYNAMIC     Gi1/0/2
   1    3c08.f6ff.1234    DYNAMIC     Gi1/0/1
Total Mac Addresses for this criterion: 3
";

const STATUS_CAPTURE: &str = "\
Port      Name               Status       Vlan       Duplex  Speed Type
Gi1/0/1   uplink             connected    trunk      a-full a-1000 10/100/1000BaseTX
Gi1/0/2                      connected    10         a-full  a-100 10/100/1000BaseTX
Gi1/0/3                      notconnect   10           auto   auto 10/100/1000BaseTX
Po1                          connected    trunk      a-full a-1000
";

struct Captures {
    mac: NamedTempFile,
    status: NamedTempFile,
}

fn captures() -> Captures {
    let mut mac = NamedTempFile::new().unwrap();
    mac.write_all(MAC_CAPTURE.as_bytes()).unwrap();
    let mut status = NamedTempFile::new().unwrap();
    status.write_all(STATUS_CAPTURE.as_bytes()).unwrap();
    Captures { mac, status }
}

fn replay(captures: &Captures, prompt: &str) -> ReplayExecutor {
    ReplayExecutor::from_files(
        &SessionCommands::default(),
        captures.mac.path(),
        captures.status.path(),
    )
    .unwrap()
    .with_prompt(prompt)
}

fn vendors() -> OuiTable {
    OuiTable::from_reader("00:50:56,\"VMware, Inc.\"\n".as_bytes()).unwrap()
}

#[tokio::test]
async fn test_replay_to_csv() {
    let captures = captures();
    let report = Collector::new(replay(&captures, "sw-lab-1#"))
        .collect()
        .await
        .unwrap();

    assert_eq!(report.switch_name, "sw-lab-1");
    assert_eq!(report.mac_rows.len(), 2);
    // Po1 has no '/' and is dropped by the include filter
    assert_eq!(report.status_rows.len(), 3);
    assert_eq!(
        report.summary,
        CorrelationSummary {
            unique: 2,
            ambiguous: 0,
            unresolved: 1,
        }
    );
    assert_eq!(report.malformed_lines(), 0);

    let out = TempDir::new().unwrap();
    let paths = CsvReportSink::new(out.path())
        .write_report(&report, &vendors())
        .unwrap();
    assert_eq!(
        paths,
        vec![
            out.path().join("sw-lab-1_mac_table.csv"),
            out.path().join("sw-lab-1_int_status.csv"),
        ]
    );

    let status = fs::read_to_string(&paths[1]).unwrap();
    let rows: Vec<&str> = status.lines().collect();
    assert_eq!(rows[0], "Port,State,VLAN,MAC Address,Vendor,Captured At");
    assert!(rows[1].starts_with("Gi1/0/1,connected,trunk,3c08.f6ff.1234,,"));
    assert!(rows[2].starts_with("Gi1/0/2,connected,10,0050.56ab.0001,\"VMware, Inc.\","));
    assert!(rows[3].starts_with("Gi1/0/3,notconnect,10,,,"));
    assert_eq!(rows.len(), 4);
}

#[tokio::test]
async fn test_replay_to_json() {
    let captures = captures();
    let report = Collector::new(replay(&captures, "sw-lab-1>"))
        .collect()
        .await
        .unwrap();

    let out = TempDir::new().unwrap();
    let paths = JsonReportSink::new(out.path())
        .write_report(&report, &vendors())
        .unwrap();
    assert_eq!(paths, vec![out.path().join("sw-lab-1_report.json")]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths[0]).unwrap()).unwrap();
    assert_eq!(json["status_rows"][0]["vlan"], "trunk");
    assert_eq!(json["anomalies"][0]["kind"], "unresolved_correlation");
    assert_eq!(json["anomalies"][0]["port"], "Gi1/0/3");
    assert_eq!(json["vendors"]["00:50:56"], "VMware, Inc.");
}

#[tokio::test]
async fn test_config_mode_session_is_refused() {
    let captures = captures();
    let err = Collector::new(replay(&captures, "sw-lab-1(config-if)#"))
        .collect()
        .await
        .unwrap_err();
    assert!(matches!(err, CollectError::ConfigMode { .. }));
}

#[tokio::test]
async fn test_configured_name_without_prompt() {
    let captures = captures();
    let executor = ReplayExecutor::from_files(
        &SessionCommands::default(),
        captures.mac.path(),
        captures.status.path(),
    )
    .unwrap();
    let report = Collector::new(executor)
        .with_switch_name("closet 4/b")
        .collect()
        .await
        .unwrap();
    assert_eq!(report.switch_name, "closet 4/b");

    let out = TempDir::new().unwrap();
    let paths = CsvReportSink::new(out.path())
        .write_report(&report, &OuiTable::default())
        .unwrap();
    assert_eq!(paths[0], out.path().join("closet_4_b_mac_table.csv"));
}
