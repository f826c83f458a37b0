//! Compile-time constants and hard limits

pub mod compile_time {
    pub mod filtering {
        /// Literal substring that disables duplicate analysis when found in a
        /// comment. Plain substring match, not whole-word or regex.
        pub const SUPPRESS_OFF_MARKER: &str = "CPD-OFF";

        /// Literal substring that re-enables duplicate analysis.
        pub const SUPPRESS_ON_MARKER: &str = "CPD-ON";

        /// Maximum comments walked per token when scanning for suppression
        /// markers. Comment chains are finite by contract; exceeding this
        /// bound leaves suppression state unchanged instead of looping.
        pub const MAX_COMMENT_CHAIN_LENGTH: usize = 1_000;
    }

    pub mod logging {
        /// Maximum events retained by the in-memory logger
        pub const MEMORY_LOGGER_CAPACITY: usize = 10_000;
    }
}
