pub mod env {
    pub const ENV_PREFIX: &str = "ACCOUNTS";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod files {
    pub const DEFAULT_CONFIG: &str = "config/default";
    pub const LOCAL_CONFIG: &str = "config/local";
}

pub mod prod {
    pub mod anti_spam {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.antispam.example.com/";
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub mod anti_spam {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
