use crate::models::{
    AgeGroupMetrics, Campaign, DemographicsResponse, DeviceMetrics, DevicesResponse, Gender,
    GenderMetrics, GenderShares, GenderSplit, MarketingData, MetricTotals, RegionMetrics,
    WeekMetrics,
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Groups values by key while keeping the order in which keys were first seen.
struct Buckets<T> {
    index: HashMap<String, usize>,
    items: Vec<T>,
}

impl<T> Buckets<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            items: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str, init: impl FnOnce() -> T) -> &mut T {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.items.push(init());
                self.index.insert(key.to_string(), self.items.len() - 1);
                self.items.len() - 1
            }
        };
        &mut self.items[position]
    }

    fn into_vec(self) -> Vec<T> {
        self.items
    }
}

pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    percent(clicks as f64, impressions as f64)
}

pub fn conversion_rate(conversions: u64, clicks: u64) -> f64 {
    percent(conversions as f64, clicks as f64)
}

/// `part / total * 100`, or zero when there is nothing to divide by.
pub fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Fraction of the campaign's clicks attributed to a breakdown bucket.
pub fn click_share(campaign: &Campaign, bucket_clicks: u64) -> f64 {
    if campaign.clicks > 0 {
        bucket_clicks as f64 / campaign.clicks as f64
    } else {
        0.0
    }
}

pub fn gender_metrics(data: &MarketingData) -> GenderSplit {
    let mut split = GenderSplit::default();

    for campaign in &data.campaigns {
        for breakdown in &campaign.demographic_breakdown {
            let side = match Gender::parse(&breakdown.gender) {
                Some(Gender::Male) => &mut split.male,
                Some(Gender::Female) => &mut split.female,
                None => continue,
            };
            let share = click_share(campaign, breakdown.performance.clicks);
            side.clicks = side.clicks.saturating_add(breakdown.performance.clicks);
            side.spend += campaign.spend * share;
            side.revenue += campaign.revenue * share;
        }
    }

    split
}

impl GenderSplit {
    pub fn total(&self) -> GenderMetrics {
        GenderMetrics {
            clicks: self.male.clicks.saturating_add(self.female.clicks),
            spend: self.male.spend + self.female.spend,
            revenue: self.male.revenue + self.female.revenue,
        }
    }

    pub fn shares(&self, gender: Gender) -> GenderShares {
        let total = self.total();
        let side = match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        };
        GenderShares {
            click_share: percent(side.clicks as f64, total.clicks as f64),
            spend_share: percent(side.spend, total.spend),
            revenue_share: percent(side.revenue, total.revenue),
        }
    }
}

pub fn age_group_metrics(data: &MarketingData) -> Vec<AgeGroupMetrics> {
    collect_age_groups(data, None)
}

pub fn age_group_metrics_for_gender(
    data: &MarketingData,
    gender: Gender,
) -> Vec<AgeGroupMetrics> {
    collect_age_groups(data, Some(gender))
}

fn collect_age_groups(data: &MarketingData, only: Option<Gender>) -> Vec<AgeGroupMetrics> {
    let mut groups = Buckets::new();

    for campaign in &data.campaigns {
        for breakdown in &campaign.demographic_breakdown {
            if let Some(gender) = only {
                if Gender::parse(&breakdown.gender) != Some(gender) {
                    continue;
                }
            }

            let performance = &breakdown.performance;
            let share = click_share(campaign, performance.clicks);
            let group = groups.entry(&breakdown.age_group, || AgeGroupMetrics {
                age_group: breakdown.age_group.clone(),
                ..AgeGroupMetrics::default()
            });
            group.impressions = group.impressions.saturating_add(performance.impressions);
            group.clicks = group.clicks.saturating_add(performance.clicks);
            group.conversions = group.conversions.saturating_add(performance.conversions);
            group.spend += campaign.spend * share;
            group.revenue += campaign.revenue * share;
        }
    }

    groups
        .into_vec()
        .into_iter()
        .map(|mut group| {
            group.ctr = ctr(group.clicks, group.impressions);
            group.conversion_rate = conversion_rate(group.conversions, group.clicks);
            group
        })
        .collect()
}

pub fn device_performance(data: &MarketingData) -> Vec<DeviceMetrics> {
    let mut devices = Buckets::new();

    for campaign in &data.campaigns {
        for entry in &campaign.device_performance {
            let device = devices.entry(&entry.device, || DeviceMetrics {
                device: entry.device.clone(),
                percentage_of_traffic: entry.percentage_of_traffic,
                ..DeviceMetrics::default()
            });
            device.impressions = device.impressions.saturating_add(entry.impressions);
            device.clicks = device.clicks.saturating_add(entry.clicks);
            device.conversions = device.conversions.saturating_add(entry.conversions);
            device.spend += entry.spend;
            device.revenue += entry.revenue;
        }
    }

    devices
        .into_vec()
        .into_iter()
        .map(|mut device| {
            device.ctr = ctr(device.clicks, device.impressions);
            device.conversion_rate = conversion_rate(device.conversions, device.clicks);
            device
        })
        .collect()
}

pub fn device_totals(devices: &[DeviceMetrics]) -> MetricTotals {
    devices.iter().fold(MetricTotals::default(), |mut acc, device| {
        acc.impressions = acc.impressions.saturating_add(device.impressions);
        acc.clicks = acc.clicks.saturating_add(device.clicks);
        acc.conversions = acc.conversions.saturating_add(device.conversions);
        acc.spend += device.spend;
        acc.revenue += device.revenue;
        acc
    })
}

pub fn regional_performance(data: &MarketingData) -> Vec<RegionMetrics> {
    let mut regions = Buckets::new();

    for campaign in &data.campaigns {
        for entry in &campaign.regional_performance {
            let region = regions.entry(&entry.region, || RegionMetrics {
                region: entry.region.clone(),
                country: entry.country.clone(),
                ..RegionMetrics::default()
            });
            region.impressions = region.impressions.saturating_add(entry.impressions);
            region.clicks = region.clicks.saturating_add(entry.clicks);
            region.conversions = region.conversions.saturating_add(entry.conversions);
            region.spend += entry.spend;
            region.revenue += entry.revenue;
        }
    }

    regions.into_vec()
}

pub fn weekly_performance(data: &MarketingData) -> Vec<WeekMetrics> {
    let mut weeks = Buckets::new();

    for campaign in &data.campaigns {
        for entry in &campaign.weekly_performance {
            let label = week_label(&entry.week_start, &entry.week_end);
            let week = weeks.entry(&label, || WeekMetrics {
                week: label.clone(),
                week_start: entry.week_start.clone(),
                week_end: entry.week_end.clone(),
                ..WeekMetrics::default()
            });
            week.spend += entry.spend;
            week.revenue += entry.revenue;
        }
    }

    weeks.into_vec()
}

/// Everything the demographic view shows, computed in one place.
pub fn demographics(data: &MarketingData) -> DemographicsResponse {
    let gender = gender_metrics(data);
    DemographicsResponse {
        male_shares: gender.shares(Gender::Male),
        female_shares: gender.shares(Gender::Female),
        gender,
        age_groups: age_group_metrics(data),
        male_age_groups: age_group_metrics_for_gender(data, Gender::Male),
        female_age_groups: age_group_metrics_for_gender(data, Gender::Female),
    }
}

pub fn devices(data: &MarketingData) -> DevicesResponse {
    let devices = device_performance(data);
    DevicesResponse {
        totals: device_totals(&devices),
        devices,
    }
}

/// `"<start day>-<end day>"`, e.g. `2024-03-01`/`2024-03-07` becomes `01-07`.
pub fn week_label(week_start: &str, week_end: &str) -> String {
    format!("{}-{}", day_of_month(week_start), day_of_month(week_end))
}

fn day_of_month(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d").to_string(),
        Err(_) => date.rsplit('-').next().unwrap_or(date).to_string(),
    }
}
