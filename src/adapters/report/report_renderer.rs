//! Report Renderer - Implementation of ResultRenderer from the report pieces.

use crate::domain::foundation::EmailAddress;
use crate::domain::topsis::ScoredMatrix;
use crate::ports::{AnalysisParameters, RenderedResult, ResultRenderer};

use super::{CsvResultWriter, HtmlTableRenderer, ResultMessageComposer};

/// Renders the CSV result file, the HTML table and the result mail.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    csv_writer: CsvResultWriter,
    html_renderer: HtmlTableRenderer,
    composer: ResultMessageComposer,
}

impl ReportRenderer {
    pub fn new(csv_writer: CsvResultWriter, composer: ResultMessageComposer) -> Self {
        Self {
            csv_writer,
            html_renderer: HtmlTableRenderer,
            composer,
        }
    }
}

impl ResultRenderer for ReportRenderer {
    fn render(
        &self,
        scored: &ScoredMatrix,
        recipient: &EmailAddress,
        parameters: AnalysisParameters<'_>,
    ) -> RenderedResult {
        let csv = self.csv_writer.write(scored);
        let html_table = self.html_renderer.render(scored);
        let message = self.composer.compose(
            recipient.clone(),
            parameters.weights,
            parameters.impacts,
            &html_table,
            &csv,
        );

        RenderedResult {
            csv,
            html_table,
            message,
        }
    }
}
