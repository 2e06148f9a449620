use approx::assert_relative_eq;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct AgeGroup {
    age_group: String,
    clicks: u64,
    spend: f64,
}

#[derive(Debug, Deserialize)]
struct GenderMetrics {
    clicks: u64,
    spend: f64,
}

#[derive(Debug, Deserialize)]
struct GenderSplit {
    male: GenderMetrics,
    female: GenderMetrics,
}

#[derive(Debug, Deserialize)]
struct Demographics {
    gender: GenderSplit,
    age_groups: Vec<AgeGroup>,
}

#[derive(Debug, Deserialize)]
struct Totals {
    impressions: u64,
    clicks: u64,
    spend: f64,
}

#[derive(Debug, Deserialize)]
struct Device {
    device: String,
    ctr: f64,
}

#[derive(Debug, Deserialize)]
struct Devices {
    totals: Totals,
    devices: Vec<Device>,
}

#[derive(Debug, Deserialize)]
struct Region {
    region: String,
    revenue: f64,
}

#[derive(Debug, Deserialize)]
struct Week {
    week: String,
    spend: f64,
}

const FIXTURE: &str = r#"{
  "company_info": { "name": "Fixture Co" },
  "campaigns": [
    {
      "id": "c1",
      "name": "Spring Sale",
      "impressions": 10000,
      "clicks": 400,
      "conversions": 40,
      "spend": 1000.0,
      "revenue": 4000.0,
      "demographic_breakdown": [
        { "age_group": "18-24", "gender": "Male", "percentage_of_audience": 30,
          "performance": { "impressions": 3000, "clicks": 100, "conversions": 10 } },
        { "age_group": "18-24", "gender": "Female", "percentage_of_audience": 20,
          "performance": { "impressions": 2000, "clicks": 100, "conversions": 12 } },
        { "age_group": "25-34", "gender": "Male", "percentage_of_audience": 50,
          "performance": { "impressions": 5000, "clicks": 200, "conversions": 18 } }
      ],
      "device_performance": [
        { "device": "Mobile", "impressions": 6000, "clicks": 300, "conversions": 30,
          "spend": 700.0, "revenue": 2500.0, "percentage_of_traffic": 60 },
        { "device": "Desktop", "impressions": 4000, "clicks": 100, "conversions": 10,
          "spend": 300.0, "revenue": 1500.0, "percentage_of_traffic": 40 }
      ],
      "regional_performance": [
        { "region": "Dubai", "country": "UAE", "spend": 600.0, "revenue": 2400.0 },
        { "region": "Doha", "country": "Qatar", "spend": 400.0, "revenue": 1600.0 }
      ],
      "weekly_performance": [
        { "week_start": "2024-03-01", "week_end": "2024-03-07", "spend": 500.0, "revenue": 1800.0 },
        { "week_start": "2024-03-08", "week_end": "2024-03-14", "spend": 500.0, "revenue": 2200.0 }
      ]
    },
    {
      "id": "c2",
      "name": "Idle Campaign",
      "impressions": 0,
      "clicks": 0,
      "conversions": 0,
      "spend": 250.0,
      "revenue": 0.0,
      "regional_performance": [
        { "region": "Dubai", "country": "UAE", "spend": 250.0, "revenue": 100.0 }
      ],
      "weekly_performance": [
        { "week_start": "2024-03-01", "week_end": "2024-03-07", "spend": 250.0, "revenue": 0.0 }
      ]
    }
  ]
}"#;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Mutex;

    static PIDS: Mutex<Vec<i32>> = Mutex::new(Vec::new());
    static REGISTER: std::sync::Once = std::sync::Once::new();

    pub fn register(pid: u32) {
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
        if let Ok(mut pids) = PIDS.lock() {
            pids.push(pid as i32);
        }
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for &pid in pids.iter() {
                unsafe {
                    libc::kill(pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn fixture_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("marketing_http_{}_{}.json", std::process::id(), nanos));
    std::fs::write(&path, FIXTURE).expect("write fixture");
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(source_var: &str, source: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_marketing_dashboard"))
        .env("PORT", port.to_string())
        .env_remove("MARKETING_DATA_URL")
        .env_remove("MARKETING_DATA_PATH")
        .env(source_var, source)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server("MARKETING_DATA_PATH", &fixture_path()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_text(client: &Client, url: String) -> String {
    let response = client.get(url).send().await.unwrap();
    assert!(response.status().is_success());
    response.text().await.unwrap()
}

#[tokio::test]
async fn http_demographics_split_spend_by_clicks() {
    let server = shared_server().await;
    let client = Client::new();

    let view: Demographics = client
        .get(format!("{}/api/demographics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(view.gender.male.clicks, 300);
    assert_eq!(view.gender.female.clicks, 100);
    assert_relative_eq!(view.gender.male.spend, 750.0);
    assert_relative_eq!(view.gender.female.spend, 250.0);

    let labels: Vec<&str> = view
        .age_groups
        .iter()
        .map(|group| group.age_group.as_str())
        .collect();
    assert_eq!(labels, vec!["18-24", "25-34"]);
    assert_eq!(view.age_groups[0].clicks, 200);
    assert_relative_eq!(view.age_groups[1].spend, 500.0);
}

#[tokio::test]
async fn http_devices_report_totals() {
    let server = shared_server().await;
    let client = Client::new();

    let view: Devices = client
        .get(format!("{}/api/devices", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(view.devices.len(), 2);
    assert_eq!(view.devices[0].device, "Mobile");
    assert_relative_eq!(view.devices[0].ctr, 5.0);
    assert_eq!(view.totals.impressions, 10_000);
    assert_eq!(view.totals.clicks, 400);
    assert_relative_eq!(view.totals.spend, 1_000.0);
}

#[tokio::test]
async fn http_regions_and_weeks_merge_across_campaigns() {
    let server = shared_server().await;
    let client = Client::new();

    let regions: Vec<Region> = client
        .get(format!("{}/api/regions", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].region, "Dubai");
    assert_relative_eq!(regions[0].revenue, 2_500.0);

    let weeks: Vec<Week> = client
        .get(format!("{}/api/weekly", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].week, "01-07");
    assert_relative_eq!(weeks[0].spend, 750.0);
}

#[tokio::test]
async fn http_views_render_html() {
    let server = shared_server().await;
    let client = Client::new();

    let demographic = get_text(&client, format!("{}/demographic-view", server.base_url)).await;
    assert!(demographic.contains("Total Clicks by Males"));
    assert!(demographic.contains("Male Campaign Performance by Age Group"));
    assert!(demographic.contains("75.0%"));

    let device = get_text(&client, format!("{}/device-view", server.base_url)).await;
    assert!(device.contains("Mobile Performance"));
    assert!(device.contains("Device Performance Details"));

    let region = get_text(&client, format!("{}/region-view", server.base_url)).await;
    assert!(region.contains("Revenue by Region"));
    assert!(region.contains("Doha"));

    let weekly = get_text(&client, format!("{}/weekly-view", server.base_url)).await;
    assert!(weekly.contains("Weekly Revenue"));
    assert!(weekly.contains("08-14"));
}

#[tokio::test]
async fn http_source_reads_dataset_over_http() {
    let upstream = shared_server().await;
    let downstream = spawn_server(
        "MARKETING_DATA_URL",
        &format!("{}/api/marketing-data", upstream.base_url),
    )
    .await;
    let client = Client::new();

    let view: Devices = client
        .get(format!("{}/api/devices", downstream.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.totals.clicks, 400);
}

#[tokio::test]
async fn http_missing_dataset_shows_generic_error() {
    let server = spawn_server("MARKETING_DATA_PATH", "/nonexistent/marketing-data.json").await;
    let client = Client::new();

    let page = get_text(&client, format!("{}/device-view", server.base_url)).await;
    assert!(page.contains("Error: Failed to load data"));

    let response = client
        .get(format!("{}/api/devices", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.text().await.unwrap(), "Failed to load data");
}

#[tokio::test]
async fn http_upstream_error_status_shows_generic_error() {
    let upstream = shared_server().await;
    let downstream = spawn_server(
        "MARKETING_DATA_URL",
        &format!("{}/no-such-dataset.json", upstream.base_url),
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/regions", downstream.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.text().await.unwrap(), "Failed to load data");

    let page = get_text(&client, format!("{}/weekly-view", downstream.base_url)).await;
    assert!(page.contains("Error: Failed to load data"));
}
