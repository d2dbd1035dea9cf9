use std::fmt;

/// Screens reachable in the client, addressed by path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Listing,
    /// `/create-job`
    CreateJob,
    /// `/job/{id}`
    Job(String),
}

impl Route {
    /// Parse a path. Unknown paths yield `None`; `/job/` with no id is
    /// kept as a detail route with an empty id.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Route::Listing),
            "/create-job" => Some(Route::CreateJob),
            _ => {
                let rest = path.strip_prefix("/job/")?;
                let id = rest.trim_end_matches('/');
                if id.contains('/') {
                    return None;
                }
                Some(Route::Job(id.to_string()))
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Listing => "Find Your Dream Job",
            Route::CreateJob => "Post a New Job",
            Route::Job(_) => "Job Details",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing => f.write_str("/"),
            Route::CreateJob => f.write_str("/create-job"),
            Route::Job(id) => write!(f, "/job/{}", id),
        }
    }
}
