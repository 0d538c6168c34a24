//! Result Message Composer - Builds the mail sent with an analysis.

use crate::domain::foundation::EmailAddress;
use crate::ports::{Attachment, ResultMessage};

use super::html_table::escape_html;

/// Subject line of every result message.
pub const RESULT_SUBJECT: &str = "TOPSIS Analysis Results";

/// File name of the attached result table.
pub const RESULT_ATTACHMENT_NAME: &str = "result.csv";

/// Composes result messages with a fixed signature.
#[derive(Debug, Clone)]
pub struct ResultMessageComposer {
    signature: String,
}

impl ResultMessageComposer {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
        }
    }

    /// Builds the message for one analysis.
    ///
    /// `weights` and `impacts` are echoed exactly as the requester typed them.
    pub fn compose(
        &self,
        recipient: EmailAddress,
        weights: &str,
        impacts: &str,
        html_table: &str,
        csv: &str,
    ) -> ResultMessage {
        let text_body = format!(
            "Your TOPSIS analysis results.\n\n\
             Analysis Parameters:\n\
             - Weights: {weights}\n\
             - Impacts: {impacts}\n\n\
             Please find the result CSV file attached.\n"
        );

        let html_body = format!(
            r#"<html>
  <body style="font-family: Arial, sans-serif; background-color:#f5f5f5; padding:20px;">
    <div style="max-width:700px;margin:0 auto;background:#ffffff;border-radius:8px;padding:24px;">
      <h2 style="margin-top:0;color:#202124;">Your TOPSIS Analysis Results</h2>
      <div style="background:#f1f3f4;border-radius:6px;padding:16px;margin-bottom:20px;">
        <h3 style="margin-top:0;margin-bottom:8px;font-size:16px;color:#202124;">Analysis Parameters:</h3>
        <ul style="margin:0;padding-left:20px;color:#202124;">
          <li><strong>Weights:</strong> {weights}</li>
          <li><strong>Impacts:</strong> {impacts}</li>
        </ul>
      </div>
      <p style="color:#202124;">Please find the result CSV file attached.</p>
      <h3 style="margin-top:0;font-size:16px;color:#202124;">Results Table:</h3>
      <div style="overflow-x:auto;border:1px solid #e0e0e0;border-radius:6px;background:#fafafa;padding:8px;">
        {html_table}
      </div>
      <p style="margin-top:24px;color:#5f6368;">Regards,<br><strong>{signature}</strong></p>
    </div>
  </body>
</html>"#,
            weights = escape_html(weights),
            impacts = escape_html(impacts),
            html_table = html_table,
            signature = escape_html(&self.signature),
        );

        ResultMessage {
            recipient,
            subject: RESULT_SUBJECT.to_string(),
            text_body,
            html_body,
            attachment: Attachment::csv(RESULT_ATTACHMENT_NAME, csv.as_bytes()),
        }
    }
}

impl Default for ResultMessageComposer {
    fn default() -> Self {
        Self::new("TOPSIS Web Service")
    }
}
