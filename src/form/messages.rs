use crate::config::Locale;

/// User-facing strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub page_title: &'static str,
    pub description: &'static str,
    pub text_label: &'static str,
    pub submit_label: &'static str,
    pub spinner: &'static str,
    pub empty_input: &'static str,
    pub success: &'static str,
    pub invalid_json: &'static str,
    pub transport_error_prefix: &'static str,
}

const FRENCH: Messages = Messages {
    page_title: "Analyse de sentiment",
    description: "Entrez un texte ci-dessous puis cliquez sur 'Envoyer' pour obtenir une prédiction depuis l'API.",
    text_label: "Texte à analyser",
    submit_label: "Envoyer",
    spinner: "Envoi du texte à l'API...",
    empty_input: "Veuillez entrer du texte avant d'envoyer.",
    success: "Réponse reçue",
    invalid_json: "Réponse invalide de l'API (JSON attendu).",
    transport_error_prefix: "Erreur lors de l'appel à l'API: ",
};

const ENGLISH: Messages = Messages {
    page_title: "Sentiment analysis",
    description: "Enter some text below and click 'Send' to get a prediction from the API.",
    text_label: "Text to analyse",
    submit_label: "Send",
    spinner: "Sending text to the API...",
    empty_input: "Please enter text before submitting.",
    success: "Response received",
    invalid_json: "Invalid API response (JSON expected).",
    transport_error_prefix: "Error while calling the API: ",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::Fr => &FRENCH,
            Locale::En => &ENGLISH,
        }
    }

    pub fn transport_error(&self, detail: &str) -> String {
        format!("{}{}", self.transport_error_prefix, detail)
    }
}
