use askama::Template;

use crate::types::question::Question;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub questions: Vec<Question>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub question: Question,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub question: Question,
}
