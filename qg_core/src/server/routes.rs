pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiQuiz {
    Generate,
}

impl BackendApiQuiz {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiQuiz::Generate => ApiPath::Static("/v1/quizzes/generate"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPing {
    Ping,
}

impl BackendApiPing {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiPing::Ping => ApiPath::Static("/v1/ping"),
        }
    }
}

pub fn print_all_backend_api_paths() {
    // Quizzes
    for quiz in [BackendApiQuiz::Generate].iter() {
        println!("/api/{}", quiz.path().as_str());
    }

    // Ping
    for ping in [BackendApiPing::Ping].iter() {
        println!("/api/{}", ping.path().as_str());
    }
}
