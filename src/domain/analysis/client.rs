//! Analysis sub-client.

use crate::client::MetalsClient;
use crate::domain::analysis::MetalAnalysis;
use crate::error::SdkError;
use crate::shared::MetalSymbol;

/// Sub-client for metal analysis queries.
pub struct Analysis<'a> {
    pub(crate) client: &'a MetalsClient,
}

impl<'a> Analysis<'a> {
    pub async fn get(&self, metal: &MetalSymbol) -> Result<MetalAnalysis, SdkError> {
        let envelope = self.client.http.get_analysis(metal).await?;
        MetalAnalysis::try_from(envelope.into_data()?)
            .map_err(|e| SdkError::Validation(e.to_string()))
    }
}
