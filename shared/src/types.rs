/// Zero based index of a single bit within a bitset or view
pub type BitIndex = u32;
