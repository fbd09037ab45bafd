// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod currency_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod settings_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account_code;
        pub(crate) mod balance_report;
        pub(crate) mod voucher;
        pub(crate) mod voucher_line;
        pub(crate) mod voucher_type;
    }
    pub(crate) mod logic {
        pub(crate) mod balance_checker;
        pub(crate) mod doc_numbering;
        pub(crate) mod duplication;
        pub(crate) mod period_lock;
        pub(crate) mod validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod settings_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod posting_usecase;
    }
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

    pub mod entities {
        pub use crate::domain::entities::account_code::*;
        pub use crate::domain::entities::balance_report::*;
        pub use crate::domain::entities::voucher::*;
        pub use crate::domain::entities::voucher_line::*;
        pub use crate::domain::entities::voucher_type::*;
    }

    pub mod logic {
        pub use crate::domain::logic::balance_checker::*;
        pub use crate::domain::logic::doc_numbering::*;
        pub use crate::domain::logic::duplication::*;
        pub use crate::domain::logic::period_lock::*;
        pub use crate::domain::logic::validation::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::settings_repository_impl::*;
        pub use crate::domain::repositories::settings_repository::*;
    }
}
