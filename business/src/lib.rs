pub mod application {
    pub mod withdrawal {
        pub mod calculate;
    }
}

pub mod domain {
    pub mod clock;
    pub mod logger;
    pub mod shared {
        pub mod locale;
    }
    pub mod withdrawal {
        pub mod calculator;
        pub mod errors;
        pub mod form;
        pub mod model;
        pub mod rule;
        pub mod validator;
        pub mod value_objects;
        pub mod use_cases {
            pub mod calculate;
        }
    }
}
