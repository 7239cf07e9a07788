use crate::dtype::ElementType;
use crate::error::{Error, Result};
use crate::host::HostObject;
use crate::layout::Order;

/// Check that a host object is an array satisfying the caller's dtype,
/// rank and memory-order requirements.
///
/// `dtype` and `order` are `None` when the caller does not care; the
/// order check additionally only applies when the required rank is above
/// 1, since rank-0 and rank-1 arrays have no meaningful ordering. Checks
/// run in order (host type, dtype, rank, order) and stop at the first
/// failure.
pub fn check_array<O: HostObject>(
    obj: &O,
    dtype: Option<ElementType>,
    rank: usize,
    order: Option<Order>,
) -> Result<()> {
    check_host_type(obj)?;
    check_dtype(obj, dtype)?;
    check_rank(obj, rank)?;
    if rank > 1 {
        check_order(obj, order)?;
    }
    Ok(())
}

fn check_host_type<O: HostObject>(obj: &O) -> Result<()> {
    if !obj.is_array() {
        let type_name = if obj.is_none() {
            "None".to_string()
        } else {
            obj.type_name().to_string()
        };
        return Err(Error::NotAnArray { type_name });
    }
    Ok(())
}

fn check_dtype<O: HostObject>(obj: &O, dtype: Option<ElementType>) -> Result<()> {
    let Some(expected) = dtype else {
        return Ok(());
    };
    let actual = obj.element_type();
    if actual != expected {
        return Err(Error::DtypeMismatch { expected, actual });
    }
    Ok(())
}

fn check_rank<O: HostObject>(obj: &O, rank: usize) -> Result<()> {
    let actual = obj.rank();
    if actual != rank {
        return Err(Error::RankMismatch {
            expected: rank,
            actual,
        });
    }
    Ok(())
}

fn check_order<O: HostObject>(obj: &O, order: Option<Order>) -> Result<()> {
    let Some(expected) = order else {
        return Ok(());
    };
    let satisfied = match expected {
        Order::C => obj.is_c_contiguous(),
        Order::F => obj.is_f_contiguous(),
    };
    if !satisfied {
        return Err(Error::OrderMismatch { expected });
    }
    Ok(())
}
