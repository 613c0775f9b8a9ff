use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DynamicArray;

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(DynamicArray::from(values))
    }
}
