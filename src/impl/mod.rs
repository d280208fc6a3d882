// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod cheque_image_datasource;
        pub(crate) mod cheques_csv_datasource;
        pub(crate) mod sample_cheques_datasource;
        pub(crate) mod seed_cheque;
    }
    pub(crate) mod models {
        pub(crate) mod cheque_amount_model;
        pub(crate) mod cheque_status_model;
        pub(crate) mod extracted_cheque_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod tracker_config_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod cheques_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod assistant;
        pub(crate) mod cheque;
        pub(crate) mod cheque_filter;
        pub(crate) mod conversation;
        pub(crate) mod due_state;
        pub(crate) mod ledger_summary;
        pub(crate) mod tracker_config;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod assistant_prompt;
        pub(crate) mod draft_validator;
        pub(crate) mod due_classifier;
        pub(crate) mod filter_engine;
        pub(crate) mod ledger_store;
    }
    pub(crate) mod repositories {
        pub(crate) mod cheques_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod assistant_usecase;
        pub(crate) mod ledger_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod conversation_printer;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub use crate::domain::logic::ledger_store::ChequeLedger;

    pub mod entities {
        pub use crate::domain::entities::assistant::*;
        pub use crate::domain::entities::cheque::*;
        pub use crate::domain::entities::cheque_filter::*;
        pub use crate::domain::entities::conversation::*;
        pub use crate::domain::entities::due_state::*;
        pub use crate::domain::entities::ledger_summary::*;
        pub use crate::domain::entities::tracker_config::*;
    }
}
