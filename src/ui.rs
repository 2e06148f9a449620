use crate::models::{
    AgeGroupMetrics, DemographicsResponse, DeviceMetrics, GenderMetrics, GenderShares,
    MetricTotals, RegionMetrics, WeekMetrics,
};
use chrono::{Datelike, Local};

const BAR_AREA_HEIGHT: f64 = 260.0;
const BAR_MIN_HEIGHT: f64 = 8.0;
const BAR_COLORS: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4",
];
const MOBILE_COLOR: &str = "#3B82F6";
const OTHER_DEVICE_COLOR: &str = "#10B981";

const CITY_COORDINATES: [(&str, f64, f64); 7] = [
    ("Abu Dhabi", 54.3773, 24.4539),
    ("Dubai", 55.2708, 25.2048),
    ("Sharjah", 55.4209, 25.3463),
    ("Riyadh", 46.6753, 24.7136),
    ("Doha", 51.531, 25.2854),
    ("Kuwait City", 47.9774, 29.3759),
    ("Manama", 50.586, 26.2285),
];

// Map viewport in degrees: longitude 44..58, latitude 22..31.
const MAP_WIDTH: f64 = 600.0;
const MAP_HEIGHT: f64 = 380.0;
const MAP_WEST: f64 = 44.0;
const MAP_EAST: f64 = 58.0;
const MAP_SOUTH: f64 = 22.0;
const MAP_NORTH: f64 = 31.0;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/demographic-view", "Demographic View"),
    ("/device-view", "Device View"),
    ("/region-view", "Region View"),
    ("/weekly-view", "Weekly View"),
];

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped thousands and at most two fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "--".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let fraction = match cents % 100 {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{f:02}"),
    };
    format!("{sign}{}{fraction}", format_count(cents / 100))
}

pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return "$--".to_string();
    }
    let number = format_number(value);
    match number.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${number}"),
    }
}

pub fn format_rate(value: f64) -> String {
    format!("{value:.2}%")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Pixel height of a bar scaled against the tallest one.
pub fn bar_height(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * BAR_AREA_HEIGHT).max(BAR_MIN_HEIGHT)
}

pub fn palette_bars<T>(
    items: &[T],
    label: impl Fn(&T) -> &str,
    value: impl Fn(&T) -> f64,
) -> Vec<Bar> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Bar {
            label: label(item).to_string(),
            value: value(item),
            color: BAR_COLORS[index % BAR_COLORS.len()],
        })
        .collect()
}

pub fn device_color(device: &str) -> &'static str {
    if device == "Mobile" {
        MOBILE_COLOR
    } else {
        OTHER_DEVICE_COLOR
    }
}

pub fn render_bar_chart(title: &str, bars: &[Bar], empty_message: &str) -> String {
    if bars.is_empty() {
        return format!(
            r#"<div class="chart-card"><h3>{}</h3><div class="empty">{}</div></div>"#,
            escape(title),
            escape(empty_message)
        );
    }

    let max = bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);
    let columns: String = bars
        .iter()
        .map(|bar| {
            format!(
                r#"<div class="bar-column"><div class="bar-value">{}</div><div class="bar" style="height: {:.1}px; background: {};"></div><div class="bar-label">{}</div></div>"#,
                format_money(bar.value),
                bar_height(bar.value, max),
                bar.color,
                escape(&bar.label)
            )
        })
        .collect();

    format!(
        r#"<div class="chart-card"><h3>{}</h3><div class="bars">{columns}</div></div>"#,
        escape(title)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub region: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub value: f64,
}

pub fn coordinates(region: &str) -> Option<(f64, f64)> {
    CITY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == region)
        .map(|(_, lon, lat)| (*lon, *lat))
}

fn project(lon: f64, lat: f64) -> (f64, f64) {
    let x = (lon - MAP_WEST) / (MAP_EAST - MAP_WEST) * MAP_WIDTH;
    let y = (MAP_NORTH - lat) / (MAP_NORTH - MAP_SOUTH) * MAP_HEIGHT;
    (x, y)
}

/// Bubble radius is `5 + value / max * 25`; regions without coordinates are skipped.
pub fn bubbles(regions: &[RegionMetrics], value: impl Fn(&RegionMetrics) -> f64) -> Vec<Bubble> {
    let max = regions.iter().map(&value).fold(0.0_f64, f64::max);
    regions
        .iter()
        .filter_map(|region| {
            let (lon, lat) = coordinates(&region.region)?;
            let (x, y) = project(lon, lat);
            let amount = value(region);
            let scale = if max > 0.0 { amount / max } else { 0.0 };
            Some(Bubble {
                region: region.region.clone(),
                x,
                y,
                radius: 5.0 + scale * 25.0,
                value: amount,
            })
        })
        .collect()
}

pub fn render_bubble_map(title: &str, bubbles: &[Bubble]) -> String {
    let markers: String = bubbles
        .iter()
        .map(|bubble| {
            format!(
                r#"<g><circle class="bubble" cx="{:.2}" cy="{:.2}" r="{:.2}"><title>{}: {}</title></circle><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text></g>"#,
                bubble.x,
                bubble.y,
                bubble.radius,
                escape(&bubble.region),
                format_money(bubble.value),
                bubble.x,
                bubble.y + bubble.radius + 12.0,
                escape(&bubble.region)
            )
        })
        .collect();

    format!(
        r#"<div class="chart-card"><h3>{}</h3><svg class="map" viewBox="0 0 {MAP_WIDTH} {MAP_HEIGHT}" role="img" aria-label="{}"><rect class="map-sea" x="0" y="0" width="{MAP_WIDTH}" height="{MAP_HEIGHT}" />{markers}</svg></div>"#,
        escape(title),
        escape(title)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub fn render_line_chart(title: &str, points: &[LinePoint]) -> String {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 260.0;
    const PADDING_X: f64 = 44.0;
    const PADDING_Y: f64 = 34.0;
    const TOP: f64 = 24.0;
    const TICKS: usize = 4;

    let body = if points.is_empty() {
        r#"<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>"#.to_string()
    } else {
        let mut min = points.iter().map(|point| point.value).fold(0.0_f64, f64::min);
        let mut max = points.iter().map(|point| point.value).fold(0.0_f64, f64::max);
        if min == max {
            min -= 1.0;
            max += 1.0;
        }

        let range = max - min;
        let x_step = if points.len() > 1 {
            (WIDTH - PADDING_X * 2.0) / (points.len() - 1) as f64
        } else {
            0.0
        };
        let scale_y = (HEIGHT - TOP - PADDING_Y) / range;
        let x = |index: usize| PADDING_X + index as f64 * x_step;
        let y = |value: f64| HEIGHT - PADDING_Y - (value - min) * scale_y;

        let path = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command} {:.2} {:.2}", x(index), y(point.value))
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut grid = String::new();
        for tick in 0..=TICKS {
            let value = min + range * tick as f64 / TICKS as f64;
            let y_pos = y(value);
            grid.push_str(&format!(
                r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y_pos:.2}" x2="{}" y2="{y_pos:.2}" /><text class="chart-label" x="{}" y="{:.2}" text-anchor="end">{}</text>"#,
                WIDTH - PADDING_X,
                PADDING_X - 10.0,
                y_pos + 4.0,
                format_axis_value(value)
            ));
        }

        let label_every = if points.len() > 8 { 2 } else { 1 };
        let labels: String = points
            .iter()
            .enumerate()
            .filter(|(index, _)| index % label_every == 0)
            .map(|(index, point)| {
                format!(
                    r#"<text class="chart-label" x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
                    x(index),
                    HEIGHT - PADDING_Y + 18.0,
                    escape(&point.label)
                )
            })
            .collect();

        let circles: String = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                format!(
                    r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="4"><title>{}: {}</title></circle>"#,
                    x(index),
                    y(point.value),
                    escape(&point.label),
                    format_money(point.value)
                )
            })
            .collect();

        let zero = y(0.0);
        format!(
            r#"{grid}<line class="chart-axis" x1="{PADDING_X}" y1="{zero:.2}" x2="{}" y2="{zero:.2}" /><path class="chart-line" d="{path}" />{circles}{labels}"#,
            WIDTH - PADDING_X
        )
    };

    format!(
        r#"<div class="chart-card"><h3>{}</h3><svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{}">{body}</svg></div>"#,
        escape(title),
        escape(title)
    )
}

fn card(label: &str, value: &str, accent: &str) -> String {
    format!(
        r#"<div class="stat {accent}"><span class="label">{}</span><span class="value">{}</span></div>"#,
        escape(label),
        escape(value)
    )
}

fn table(title: &str, headers: &[&str], rows: &[Vec<String>], empty_message: &str) -> String {
    let head: String = std::iter::once("#")
        .chain(headers.iter().copied())
        .map(|header| format!("<th>{}</th>", escape(header)))
        .collect();
    let body: String = if rows.is_empty() {
        format!(
            r#"<tr><td class="empty" colspan="{}">{}</td></tr>"#,
            headers.len() + 1,
            escape(empty_message)
        )
    } else {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let cells: String = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", escape(cell)))
                    .collect();
                format!("<tr><td>{}</td>{cells}</tr>", index + 1)
            })
            .collect()
    };

    format!(
        r#"<div class="table-card"><h3>{}</h3><div class="table-scroll"><table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></div></div>"#,
        escape(title)
    )
}

const AGE_GROUP_HEADERS: [&str; 8] = [
    "Age Group",
    "Impressions",
    "Clicks",
    "Conversions",
    "CTR",
    "Conv. Rate",
    "Spend",
    "Revenue",
];

const DEVICE_HEADERS: [&str; 9] = [
    "Device",
    "Traffic %",
    "Impressions",
    "Clicks",
    "Conversions",
    "CTR",
    "Conv. Rate",
    "Spend",
    "Revenue",
];

/// Rows for a gender campaign table, most impressions first.
pub fn age_group_rows(groups: &[AgeGroupMetrics]) -> Vec<Vec<String>> {
    let mut sorted: Vec<&AgeGroupMetrics> = groups.iter().collect();
    sorted.sort_by(|a, b| b.impressions.cmp(&a.impressions));
    sorted
        .into_iter()
        .map(|group| {
            vec![
                group.age_group.clone(),
                format_count(group.impressions),
                format_count(group.clicks),
                format_count(group.conversions),
                format_rate(group.ctr),
                format_rate(group.conversion_rate),
                format_money(group.spend),
                format_money(group.revenue),
            ]
        })
        .collect()
}

fn gender_cards(heading: &str, subject: &str, metrics: &GenderMetrics, accent: &str) -> String {
    format!(
        r#"<div class="card-column"><h2>{}</h2>{}{}{}</div>"#,
        escape(heading),
        card(&format!("Total Clicks{subject}"), &format_count(metrics.clicks), accent),
        card(&format!("Total Spend{subject}"), &format_money(metrics.spend), accent),
        card(&format!("Total Revenue{subject}"), &format_money(metrics.revenue), accent)
    )
}

fn share_rows(label: &str, shares: &GenderShares) -> String {
    [
        ("Click Share", shares.click_share),
        ("Spend Share", shares.spend_share),
        ("Revenue Share", shares.revenue_share),
    ]
    .iter()
    .map(|(name, value)| {
        format!(
            r#"<div class="insight"><span class="label">{} {}:</span><span class="value">{value:.1}%</span></div>"#,
            escape(label),
            name
        )
    })
    .collect()
}

fn age_label(group: &AgeGroupMetrics) -> &str {
    &group.age_group
}

pub fn render_demographic_view(view: &DemographicsResponse) -> String {
    let total = view.gender.total();
    let cards = format!(
        r#"<section class="panel">{}{}{}</section>"#,
        gender_cards("Male Demographics", " by Males", &view.gender.male, "male"),
        gender_cards("Female Demographics", " by Females", &view.gender.female, "female"),
        gender_cards("Summary", "", &total, "summary")
    );

    let spend_bars = palette_bars(&view.age_groups, age_label, |group| group.spend);
    let revenue_bars = palette_bars(&view.age_groups, age_label, |group| group.revenue);
    let charts = format!(
        r#"<section class="charts">{}{}</section>"#,
        render_bar_chart("Total Spend by Age Group", &spend_bars, "No age group data available"),
        render_bar_chart("Total Revenue by Age Group", &revenue_bars, "No age group data available")
    );

    let tables = format!(
        r#"<section class="tables">{}{}</section>"#,
        table(
            "Male Campaign Performance by Age Group",
            &AGE_GROUP_HEADERS,
            &age_group_rows(&view.male_age_groups),
            "No male demographic data available",
        ),
        table(
            "Female Campaign Performance by Age Group",
            &AGE_GROUP_HEADERS,
            &age_group_rows(&view.female_age_groups),
            "No female demographic data available",
        )
    );

    let insights = format!(
        r#"<section class="insights"><h3>Performance Insights</h3><div class="insight-grid"><div>{}</div><div>{}</div></div></section>"#,
        share_rows("Male", &view.male_shares),
        share_rows("Female", &view.female_shares)
    );

    render_page(
        "Demographic Analytics",
        "Gender and age-based performance metrics across all campaigns",
        &format!("{cards}{charts}{tables}{insights}"),
    )
}

fn device_cards(device: &DeviceMetrics, accent: &str) -> String {
    let name = &device.device;
    format!(
        r#"<div class="card-column"><h2>{} Performance</h2>{}{}{}{}{}</div>"#,
        escape(name),
        card(&format!("{name} Impressions"), &format_count(device.impressions), accent),
        card(&format!("{name} Clicks"), &format_count(device.clicks), accent),
        card(&format!("{name} Conversions"), &format_count(device.conversions), accent),
        card(&format!("{name} Spend"), &format_money(device.spend), accent),
        card(&format!("{name} Revenue"), &format_money(device.revenue), accent)
    )
}

/// Rows for the device details table, highest traffic share first.
pub fn device_rows(devices: &[DeviceMetrics]) -> Vec<Vec<String>> {
    let mut sorted: Vec<&DeviceMetrics> = devices.iter().collect();
    sorted.sort_by(|a, b| b.percentage_of_traffic.total_cmp(&a.percentage_of_traffic));
    sorted
        .into_iter()
        .map(|device| {
            vec![
                device.device.clone(),
                format!("{:.1}%", device.percentage_of_traffic),
                format_count(device.impressions),
                format_count(device.clicks),
                format_count(device.conversions),
                format_rate(device.ctr),
                format_rate(device.conversion_rate),
                format_money(device.spend),
                format_money(device.revenue),
            ]
        })
        .collect()
}

pub fn render_device_view(devices: &[DeviceMetrics], totals: &MetricTotals) -> String {
    let summary = format!(
        r#"<section class="panel">{}{}{}{}</section>"#,
        card("Total Impressions", &format_count(totals.impressions), "summary"),
        card("Total Clicks", &format_count(totals.clicks), "summary"),
        card("Total Conversions", &format_count(totals.conversions), "summary"),
        card("Total Revenue", &format_money(totals.revenue), "summary")
    );

    let per_device: String = [("Mobile", "male"), ("Desktop", "summary")]
        .iter()
        .filter_map(|(name, accent)| {
            devices
                .iter()
                .find(|device| device.device == *name)
                .map(|device| device_cards(device, accent))
        })
        .collect();

    let bars = |value: fn(&DeviceMetrics) -> f64| -> Vec<Bar> {
        devices
            .iter()
            .map(|device| Bar {
                label: device.device.clone(),
                value: value(device),
                color: device_color(&device.device),
            })
            .collect()
    };
    let charts = format!(
        r#"<section class="charts">{}{}</section>"#,
        render_bar_chart(
            "Spend by Device",
            &bars(|device| device.spend),
            "No data available"
        ),
        render_bar_chart(
            "Revenue by Device",
            &bars(|device| device.revenue),
            "No data available"
        )
    );

    let details = table(
        "Device Performance Details",
        &DEVICE_HEADERS,
        &device_rows(devices),
        "No device performance data available",
    );

    render_page(
        "Device Performance",
        "Compare marketing campaign performance across mobile and desktop devices.",
        &format!(r#"{summary}<section class="charts">{per_device}</section>{charts}{details}"#),
    )
}

pub fn render_region_view(regions: &[RegionMetrics]) -> String {
    let content = format!(
        r#"<section class="charts">{}{}</section>"#,
        render_bubble_map("Revenue by Region", &bubbles(regions, |region| region.revenue)),
        render_bubble_map("Spend by Region", &bubbles(regions, |region| region.spend))
    );
    render_page("Region View", "", &content)
}

pub fn render_weekly_view(weeks: &[WeekMetrics]) -> String {
    let series = |value: fn(&WeekMetrics) -> f64| -> Vec<LinePoint> {
        weeks
            .iter()
            .map(|week| LinePoint {
                label: week.week.clone(),
                value: value(week),
            })
            .collect()
    };
    let content = format!(
        r#"<section class="charts">{}{}</section>"#,
        render_line_chart("Weekly Revenue", &series(|week| week.revenue)),
        render_line_chart("Weekly Spend", &series(|week| week.spend))
    );
    render_page("Weekly View", "", &content)
}

pub fn render_error(title: &str, message: &str) -> String {
    let content = format!(
        r#"<div class="status" data-type="error">Error: {}</div>"#,
        escape(message)
    );
    render_page(title, "", &content)
}

pub fn render_index() -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            format!(r#"<a class="stat link-card" href="{href}"><span class="value">{label}</span></a>"#)
        })
        .collect();
    render_page(
        "Marketing Dashboard",
        "Campaign performance by audience, device, region and week.",
        &format!(r#"<section class="panel">{links}</section>"#),
    )
}

fn render_page(title: &str, subtitle: &str, content: &str) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect();
    let subtitle = if subtitle.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="subtitle">{}</p>"#, escape(subtitle))
    };

    LAYOUT_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{SUBTITLE}}", &subtitle)
        .replace("{{NAV}}", &nav)
        .replace("{{YEAR}}", &Local::now().year().to_string())
        .replace("{{CONTENT}}", content)
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #111827;
      --panel: #1f2937;
      --border: #374151;
      --ink: #f9fafb;
      --muted: #9ca3af;
      --accent: #3b82f6;
      --accent-2: #10b981;
      --accent-3: #ec4899;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
    }

    nav {
      width: 220px;
      padding: 24px 16px;
      background: var(--panel);
      border-right: 1px solid var(--border);
      display: flex;
      flex-direction: column;
      gap: 8px;
    }

    nav a {
      color: var(--muted);
      text-decoration: none;
      padding: 10px 12px;
      border-radius: 8px;
    }

    nav a:hover {
      background: rgba(59, 130, 246, 0.12);
      color: var(--ink);
    }

    .app {
      flex: 1;
      display: flex;
      flex-direction: column;
    }

    header {
      background: linear-gradient(90deg, #1f2937, #374151);
      padding: 48px 24px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 3rem);
    }

    .subtitle {
      margin: 16px 0 0;
      color: #d1d5db;
    }

    .content {
      flex: 1;
      padding: 24px;
      display: grid;
      gap: 32px;
    }

    .panel,
    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 24px;
    }

    .card-column {
      display: grid;
      gap: 16px;
    }

    .card-column h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .stat {
      background: var(--panel);
      border-radius: 12px;
      padding: 18px;
      border: 1px solid var(--border);
      display: grid;
      gap: 8px;
      color: var(--ink);
      text-decoration: none;
    }

    .stat.male {
      border-color: rgba(59, 130, 246, 0.4);
    }

    .stat.female {
      border-color: rgba(236, 72, 153, 0.4);
    }

    .stat.summary {
      border-color: rgba(16, 185, 129, 0.4);
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .chart-card,
    .table-card,
    .insights {
      background: var(--panel);
      border-radius: 12px;
      padding: 24px;
      border: 1px solid var(--border);
    }

    h3 {
      margin: 0 0 16px;
      font-size: 1.1rem;
    }

    .bars {
      display: flex;
      align-items: flex-end;
      justify-content: space-between;
      gap: 12px;
      height: 320px;
    }

    .bar-column {
      flex: 1;
      display: flex;
      flex-direction: column;
      align-items: center;
      min-width: 0;
    }

    .bar {
      width: 100%;
      max-width: 80px;
      border-radius: 4px 4px 0 0;
    }

    .bar-value,
    .bar-label {
      font-size: 0.75rem;
      color: var(--muted);
      margin: 8px 0;
      text-align: center;
    }

    .empty {
      color: var(--muted);
      text-align: center;
      padding: 48px 0;
    }

    .chart,
    .map {
      width: 100%;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--panel);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(156, 163, 175, 0.2);
    }

    .chart-axis {
      stroke: rgba(156, 163, 175, 0.4);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .map-sea {
      fill: #2d3748;
    }

    .bubble {
      fill: rgba(59, 130, 246, 0.5);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .table-scroll {
      max-height: 400px;
      overflow: auto;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th,
    td {
      padding: 10px 12px;
      border-bottom: 1px solid var(--border);
      text-align: right;
    }

    th:nth-child(2),
    td:nth-child(2) {
      text-align: left;
    }

    th {
      color: var(--muted);
      font-weight: 500;
    }

    .insight-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 24px;
    }

    .insight {
      display: flex;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .insight .value {
      font-size: 1rem;
    }

    .status[data-type="error"] {
      color: #f87171;
      font-size: 1.25rem;
      text-align: center;
      padding: 64px 0;
    }

    footer {
      padding: 16px 24px;
      color: var(--muted);
      border-top: 1px solid var(--border);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <nav>
    <a href="/">Overview</a>
    {{NAV}}
  </nav>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
      {{SUBTITLE}}
    </header>
    <div class="content">
      {{CONTENT}}
    </div>
    <footer>&copy; {{YEAR}} Marketing Dashboard</footer>
  </main>
</body>
</html>
"#;
