use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Activity;
use crate::utils::bucket::DayBucket;

/// Body of `GET /trips/{trip_id}/activities`
#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<DayActivities>,
}

#[derive(Debug, Serialize)]
pub struct DayActivities {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl From<DayBucket<Activity>> for DayActivities {
    fn from(bucket: DayBucket<Activity>) -> Self {
        Self {
            date: bucket.date,
            activities: bucket.items,
        }
    }
}
