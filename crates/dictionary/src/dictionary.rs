#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    /// Word forms, primary form first, alternates after it.
    pub forms: Vec<String>,
    pub meanings: Vec<WordMeaning>,
}



#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    /// Part of speech or another grouping label. Kept as an open string so an
    /// unfamiliar label can never fail a lookup.
    pub group: String,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}


#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}
