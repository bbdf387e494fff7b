//! Helper macro generating port error enums with `impl Into` constructors.
//!
//! Each variant gets a snake_case constructor so adapters can write
//! `SalaryRepositoryError::query(err.to_string())` instead of spelling out
//! the struct literal.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum PayrollPortError {
            Unavailable => "payroll store unavailable",
            Rejected { reason: String } => "salary record rejected: {reason}",
            MissingMonths { employee: String, missing: u64 } =>
                "employee {employee} is missing {missing} salary months",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(
            PayrollPortError::unavailable().to_string(),
            "payroll store unavailable"
        );
    }

    #[test]
    fn string_fields_accept_str() {
        let err = PayrollPortError::rejected("month out of range");
        assert_eq!(
            err,
            PayrollPortError::Rejected { reason: "month out of range".to_owned() }
        );
        assert_eq!(err.to_string(), "salary record rejected: month out of range");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = PayrollPortError::missing_months("NAT1004", 2_u64);
        assert_eq!(err.to_string(), "employee NAT1004 is missing 2 salary months");
    }
}
