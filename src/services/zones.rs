//! Zone and zone record endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use crate::types::{
    ListOptions, Zone, ZoneDistribution, ZoneFile, ZoneRecord, ZoneRecordPayload,
    ZoneRecordUpdatePayload,
};

/// The zones service.
///
/// Zones are addressed by name; records by numeric id within their zone.
pub struct Zones<'a> {
    pub(crate) client: &'a Client,
}

impl Zones<'_> {
    /// List the zones in the account.
    ///
    /// `GET /{account}/zones`
    pub async fn list_zones(
        &self,
        account_id: u64,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<Zone>>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/zones"), &options.to_query())
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one zone.
    ///
    /// `GET /{account}/zones/{zone}`
    pub async fn get_zone(&self, account_id: u64, zone: &str) -> Result<Envelope<Zone>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/zones/{zone}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Download the zone file for a zone.
    ///
    /// `GET /{account}/zones/{zone}/file`
    pub async fn get_zone_file(&self, account_id: u64, zone: &str) -> Result<Envelope<ZoneFile>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/zones/{zone}/file"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Check whether a zone is fully distributed across the name server
    /// network.
    ///
    /// `GET /{account}/zones/{zone}/distribution`
    pub async fn check_zone_distribution(
        &self,
        account_id: u64,
        zone: &str,
    ) -> Result<Envelope<ZoneDistribution>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/zones/{zone}/distribution"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// List the records in a zone, in server-provided order.
    ///
    /// `GET /{account}/zones/{zone}/records`
    pub async fn list_zone_records(
        &self,
        account_id: u64,
        zone: &str,
        options: &ListOptions,
    ) -> Result<Envelope<Vec<ZoneRecord>>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/zones/{zone}/records"),
                &options.to_query(),
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Create a record in a zone.
    ///
    /// `POST /{account}/zones/{zone}/records`
    pub async fn create_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        payload: &ZoneRecordPayload,
    ) -> Result<Envelope<ZoneRecord>> {
        let raw = self
            .client
            .post(&format!("/{account_id}/zones/{zone}/records"), Some(payload))
            .await?;
        Envelope::decode(raw)
    }

    /// Retrieve one zone record.
    ///
    /// `GET /{account}/zones/{zone}/records/{record}`
    pub async fn get_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
    ) -> Result<Envelope<ZoneRecord>> {
        let raw = self
            .client
            .get(&format!("/{account_id}/zones/{zone}/records/{record_id}"), &[])
            .await?;
        Envelope::decode(raw)
    }

    /// Update fields of a zone record; unset fields are left as they are.
    ///
    /// `PATCH /{account}/zones/{zone}/records/{record}`
    pub async fn update_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
        payload: &ZoneRecordUpdatePayload,
    ) -> Result<Envelope<ZoneRecord>> {
        let raw = self
            .client
            .patch(
                &format!("/{account_id}/zones/{zone}/records/{record_id}"),
                payload,
            )
            .await?;
        Envelope::decode(raw)
    }

    /// Delete a zone record. The response carries no payload.
    ///
    /// `DELETE /{account}/zones/{zone}/records/{record}`
    pub async fn delete_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
    ) -> Result<Envelope<()>> {
        let raw = self
            .client
            .delete(&format!("/{account_id}/zones/{zone}/records/{record_id}"))
            .await?;
        Ok(Envelope::empty(raw))
    }

    /// Check whether one record is fully distributed across the name server
    /// network.
    ///
    /// `GET /{account}/zones/{zone}/records/{record}/distribution`
    pub async fn check_zone_record_distribution(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
    ) -> Result<Envelope<ZoneDistribution>> {
        let raw = self
            .client
            .get(
                &format!("/{account_id}/zones/{zone}/records/{record_id}/distribution"),
                &[],
            )
            .await?;
        Envelope::decode(raw)
    }
}
