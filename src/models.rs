use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketingData {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: String,
    pub platform: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub demographic_breakdown: Vec<DemographicBreakdown>,
    pub device_performance: Vec<DevicePerformance>,
    pub regional_performance: Vec<RegionalPerformance>,
    pub weekly_performance: Vec<WeeklyPerformance>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemographicBreakdown {
    pub age_group: String,
    pub gender: String,
    pub percentage_of_audience: f64,
    pub performance: SegmentPerformance,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SegmentPerformance {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DevicePerformance {
    pub device: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub percentage_of_traffic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegionalPerformance {
    pub region: String,
    pub country: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeeklyPerformance {
    pub week_start: String,
    pub week_end: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if value.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenderMetrics {
    pub clicks: u64,
    pub spend: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenderSplit {
    pub male: GenderMetrics,
    pub female: GenderMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenderShares {
    pub click_share: f64,
    pub spend_share: f64,
    pub revenue_share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AgeGroupMetrics {
    pub age_group: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeviceMetrics {
    pub device: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
    pub ctr: f64,
    pub conversion_rate: f64,
    pub percentage_of_traffic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetricTotals {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegionMetrics {
    pub region: String,
    pub country: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WeekMetrics {
    pub week: String,
    pub week_start: String,
    pub week_end: String,
    pub spend: f64,
    pub revenue: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemographicsResponse {
    pub gender: GenderSplit,
    pub male_shares: GenderShares,
    pub female_shares: GenderShares,
    pub age_groups: Vec<AgeGroupMetrics>,
    pub male_age_groups: Vec<AgeGroupMetrics>,
    pub female_age_groups: Vec<AgeGroupMetrics>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub totals: MetricTotals,
    pub devices: Vec<DeviceMetrics>,
}
