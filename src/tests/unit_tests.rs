mod hashmap {
    use std::collections::hash_map::RandomState;
    use std::collections::BTreeSet;
    use std::hash::{BuildHasherDefault, Hash, Hasher};
    use std::panic::{RefUnwindSafe, UnwindSafe};
    use std::rc::Rc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering::Relaxed;
    use std::sync::Arc;

    use proptest::prelude::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    use crate::hash_map::{self, DEFAULT_CAPACITY};
    use crate::{Entry, Equivalent, Error, HashMap, Map};

    static_assertions::assert_impl_all!(HashMap<String, String>: Send, Sync, RefUnwindSafe, UnwindSafe);
    static_assertions::assert_not_impl_any!(HashMap<Rc<String>, Rc<String>>: Send, Sync);
    static_assertions::assert_not_impl_any!(HashMap<String, *const String>: Send, Sync);
    static_assertions::assert_impl_all!(hash_map::Iter<'static, String, String>: Send, Sync, ExactSizeIterator);
    static_assertions::assert_impl_all!(hash_map::IntoIter<String, String>: Send, Sync, ExactSizeIterator);
    static_assertions::assert_impl_all!(Entry<String, String>: Send, Sync, Clone, Eq, Hash);

    struct Data {
        data: usize,
        checker: Arc<AtomicUsize>,
    }

    impl Data {
        fn new(data: usize, checker: Arc<AtomicUsize>) -> Data {
            checker.fetch_add(1, Relaxed);
            Data { data, checker }
        }
    }

    impl Clone for Data {
        fn clone(&self) -> Self {
            Data::new(self.data, self.checker.clone())
        }
    }

    impl Drop for Data {
        fn drop(&mut self) {
            self.checker.fetch_sub(1, Relaxed);
        }
    }

    impl Eq for Data {}

    impl Hash for Data {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.data.hash(state);
        }
    }

    impl PartialEq for Data {
        fn eq(&self, other: &Self) -> bool {
            self.data == other.data
        }
    }

    #[derive(Debug, Eq, PartialEq)]
    struct EqTest(String, usize);

    impl Equivalent<EqTest> for str {
        fn equivalent(&self, key: &EqTest) -> bool {
            key.0.eq(self)
        }
    }

    impl Hash for EqTest {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.0.hash(state);
        }
    }

    /// Every key hashes to the same value, forcing all entries into one bucket.
    #[derive(Default)]
    struct ConstantHasher;

    impl Hasher for ConstantHasher {
        fn finish(&self) -> u64 {
            7
        }
        fn write(&mut self, _bytes: &[u8]) {}
    }

    type Colliding = BuildHasherDefault<ConstantHasher>;

    fn assert_views_consistent<K, V, H>(hashmap: &HashMap<K, V, H>)
    where
        K: Eq + Hash,
        H: std::hash::BuildHasher,
    {
        let len = hashmap.len();
        assert_eq!(hashmap.keys().len(), len);
        assert_eq!(hashmap.keys().count(), len);
        assert_eq!(hashmap.values().count(), len);
        assert_eq!(hashmap.entries().count(), len);
        assert_eq!(hashmap.iter().count(), len);
        for k in hashmap.keys() {
            assert!(hashmap.contains_key(k));
        }
    }

    #[test]
    fn equivalent() {
        let mut hashmap: HashMap<EqTest, usize> = HashMap::default();
        assert!(hashmap
            .put_if_absent(EqTest("HELLO".to_owned(), 1), 1)
            .is_ok());
        assert!(!hashmap.contains_key("NO"));
        assert!(hashmap.contains_key("HELLO"));
        assert_eq!(hashmap.remove("HELLO"), Some(1));
    }

    #[test]
    fn capacity() {
        let hashmap: HashMap<u64, u64> = HashMap::new();
        assert_eq!(hashmap.capacity(), DEFAULT_CAPACITY);

        let hashmap: HashMap<u64, u64> = HashMap::with_capacity(1).unwrap();
        assert_eq!(hashmap.capacity(), 1);

        assert_eq!(
            HashMap::<u64, u64>::with_capacity(0).err(),
            Some(Error::InvalidCapacity(0))
        );
        assert_eq!(
            Error::InvalidCapacity(0).to_string(),
            "invalid capacity 0: the bucket array needs at least one bucket"
        );
    }

    #[test]
    fn put_get() {
        let mut hashmap: HashMap<String, i32> = HashMap::default();
        assert!(hashmap.put(String::from("Hash"), 21).is_none());
        assert_eq!(hashmap.get("Hash"), Some(&21));
        assert!(hashmap.get("hash").is_none());
        assert!(hashmap.contains_key("Hash"));
        assert_eq!(hashmap.get_key_value("Hash"), Some((&String::from("Hash"), &21)));
        assert_eq!(hashmap.read("Hash", |k, v| format!("{k}={v}")).unwrap(), "Hash=21");
    }

    #[test]
    fn put_overwrites() {
        let mut hashmap: HashMap<&str, f64> = HashMap::default();
        assert!(hashmap.put("Vladislav", 6.0).is_none());
        assert_eq!(hashmap.put("Vladislav", 7.0), Some(6.0));
        assert!(hashmap.put("Pesho", 7.1).is_none());
        assert_eq!(hashmap.len(), 2);
        assert_eq!(hashmap.get("Vladislav"), Some(&7.0));
        assert_eq!(hashmap.values().filter(|v| **v == 6.0).count(), 0);
        assert_views_consistent(&hashmap);
    }

    #[test]
    fn put_moves_entry_to_bucket_tail() {
        let mut hashmap: HashMap<u64, u64, Colliding> =
            HashMap::with_capacity_and_hasher(4, Colliding::default()).unwrap();
        for k in 0..4 {
            assert!(hashmap.put(k, k).is_none());
        }
        assert_eq!(hashmap.keys().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);

        assert_eq!(hashmap.put(1, 10), Some(1));
        assert_eq!(hashmap.keys().copied().collect::<Vec<_>>(), [0, 2, 3, 1]);

        assert_eq!(hashmap.replace(&0, 20), Some(0));
        assert_eq!(hashmap.keys().copied().collect::<Vec<_>>(), [2, 3, 1, 0]);

        assert!(hashmap.replace_if_eq(&2, &2, 30));
        assert_eq!(hashmap.keys().copied().collect::<Vec<_>>(), [3, 1, 0, 2]);
        assert_eq!(
            hashmap.values().copied().collect::<Vec<_>>(),
            [3, 10, 20, 30]
        );
    }

    #[test]
    fn collisions() {
        let mut hashmap: HashMap<String, usize, Colliding> =
            HashMap::with_capacity_and_hasher(1, Colliding::default()).unwrap();
        for i in 0..64 {
            assert!(hashmap.put(i.to_string(), i).is_none());
        }
        assert_eq!(hashmap.len(), 64);
        for i in 0..64 {
            assert_eq!(hashmap.bucket_index(i.to_string().as_str()), 0);
            assert_eq!(hashmap.get(i.to_string().as_str()), Some(&i));
        }
        for i in (0..64).step_by(2) {
            assert_eq!(hashmap.remove(i.to_string().as_str()), Some(i));
        }
        assert_eq!(hashmap.len(), 32);
        assert!(!hashmap.contains_key("0"));
        assert!(hashmap.contains_key("1"));
        assert_views_consistent(&hashmap);
    }

    #[test]
    fn remove() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hash", 21);
        hashmap.put("Levski", 52);
        assert_eq!(hashmap.remove("Hash"), Some(21));
        assert!(hashmap.remove("Hashing").is_none());
        assert!(hashmap.get("Hash").is_none());
        assert!(!hashmap.contains_key("Hash"));
        assert_eq!(hashmap.len(), 1);
        assert_eq!(hashmap.remove_entry("Levski"), Some(("Levski", 52)));
        assert!(hashmap.is_empty());
    }

    #[test]
    fn remove_if_eq() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hash", 21);
        hashmap.put("Levski", 52);
        assert!(hashmap.remove_if_eq("Hash", &21));
        assert!(!hashmap.remove_if_eq("Hash", &31));
        assert!(!hashmap.remove_if_eq("Test", &21));
        assert!(!hashmap.remove_if_eq("Levski", &21));
        assert!(hashmap.get("Hash").is_none());
        assert_eq!(hashmap.get("Levski"), Some(&52));
        assert_eq!(hashmap.len(), 1);
    }

    #[test]
    fn remove_if() {
        let mut hashmap: HashMap<u64, u64> = HashMap::default();
        hashmap.put(1, 0);
        assert!(hashmap
            .remove_if(&1, |v| {
                *v += 1;
                false
            })
            .is_none());
        assert_eq!(hashmap.get(&1), Some(&1));
        assert_eq!(hashmap.remove_if(&1, |v| *v == 1), Some((1, 1)));
        assert!(hashmap.remove_if(&1, |_| true).is_none());
    }

    #[test]
    fn get_or() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hash", 21);
        hashmap.put("Levski", 52);
        assert_eq!(*hashmap.get_or("Hash", &1), 21);
        assert_eq!(*hashmap.get_or("Hashq", &1), 1);
    }

    #[test]
    fn put_if_absent() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hash", 21);
        assert!(hashmap.put_if_absent("Levski", 52).is_ok());
        assert_eq!(hashmap.put_if_absent("Levski", 99), Err(("Levski", 99)));
        assert_eq!(hashmap.get("Levski"), Some(&52));
        assert!(hashmap.put_if_absent("HashMap", 11).is_ok());
        assert_eq!(hashmap.len(), 3);
    }

    #[test]
    fn put_all() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hack", 5);
        hashmap.put("Iniesta", 25);

        let mut other: HashMap<&str, i32, Colliding> = HashMap::default();
        other.put("Game of thrones", 7);

        hashmap.put_all(&other);
        assert_eq!(hashmap.entries().len(), 3);
        assert_eq!(hashmap.keys().len(), 3);
        assert_eq!(hashmap.values().len(), 3);
        assert!(hashmap.contains_key("Game of thrones"));
        assert_eq!(other.len(), 1);

        other.put("Hack", 50);
        hashmap.put_all(&other);
        assert_eq!(hashmap.len(), 3);
        assert_eq!(hashmap.get("Hack"), Some(&50));
    }

    #[test]
    fn replace() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hack", 5);
        hashmap.put("Iniesta", 25);
        assert_eq!(hashmap.replace("Iniesta", 5), Some(25));
        assert!(hashmap.replace("LOl", 45).is_none());
        assert!(!hashmap.contains_key("LOl"));
        assert_eq!(hashmap.get("Iniesta"), Some(&5));
        assert_eq!(hashmap.len(), 2);
        assert_eq!(hashmap.values().filter(|v| **v == 5).count(), 2);
    }

    #[test]
    fn replace_if_eq() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hack", 5);
        hashmap.put("Iniesta", 25);
        assert!(hashmap.replace_if_eq("Iniesta", &25, 16));
        assert_eq!(hashmap.get("Iniesta"), Some(&16));

        let before = hashmap.clone();
        assert!(!hashmap.replace_if_eq("Hack", &85, 17));
        assert!(!hashmap.replace_if_eq("Missing", &5, 17));
        assert_eq!(hashmap, before);
        assert_eq!(hashmap.get("Hack"), Some(&5));
    }

    #[test]
    fn contains_value() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        hashmap.put("Hack", 5);
        assert!(hashmap.contains_value(&5));
        assert!(!hashmap.contains_value(&20));
        hashmap.remove("Hack");
        assert!(!hashmap.contains_value(&5));
    }

    #[test]
    fn clear() {
        let mut hashmap: HashMap<&str, i32> = HashMap::with_capacity(13).unwrap();
        hashmap.put("Hack", 5);
        hashmap.put("Iniesta", 25);
        hashmap.clear();
        assert_eq!(hashmap.entries().len(), 0);
        assert_eq!(hashmap.keys().len(), 0);
        assert!(hashmap.is_empty());
        assert_eq!(hashmap.capacity(), 13);
        assert!(hashmap.get("Hack").is_none());
        assert!(!hashmap.contains_value(&5));
        assert!(hashmap.put("Hack", 6).is_none());
        assert_eq!(hashmap.len(), 1);
    }

    #[test]
    fn size() {
        let mut hashmap: HashMap<&str, i32> = HashMap::default();
        assert_eq!(hashmap.len(), 0);
        hashmap.put("TV", 23);
        assert_eq!(hashmap.len(), 1);
        assert!((hashmap.load_factor() - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn insert_drop() {
        let checker = Arc::new(AtomicUsize::new(0));
        let mut hashmap: HashMap<Data, Data> = HashMap::with_capacity(16).unwrap();
        for d in 0..256 {
            hashmap.put(Data::new(d, checker.clone()), Data::new(d, checker.clone()));
        }
        assert_eq!(checker.load(Relaxed), 512);

        for d in 0..256 {
            assert!(hashmap
                .put(Data::new(d, checker.clone()), Data::new(d + 1, checker.clone()))
                .is_some());
        }
        assert_eq!(checker.load(Relaxed), 512);

        hashmap.retain(|k, _| k.data % 2 == 0);
        assert_eq!(checker.load(Relaxed), 256);

        let cloned = hashmap.clone();
        assert_eq!(checker.load(Relaxed), 512);
        drop(cloned);

        hashmap.clear();
        assert_eq!(checker.load(Relaxed), 0);
    }

    #[test]
    fn retain() {
        let mut hashmap: HashMap<u32, u32, Colliding> = HashMap::default();
        for k in 0..10 {
            hashmap.put(k, k * 10);
        }
        hashmap.retain(|k, v| {
            *v += 1;
            k % 3 == 0
        });
        assert_eq!(hashmap.len(), 4);
        assert_eq!(
            hashmap.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            vec![(0, 1), (3, 31), (6, 61), (9, 91)]
        );
        assert_views_consistent(&hashmap);
    }

    #[test]
    fn from_iter() {
        let workload_size = 256;
        let hashmap: HashMap<usize, usize> = (0..workload_size).map(|k| (k, k)).collect();
        assert_eq!(hashmap.len(), workload_size);
        for k in 0..workload_size {
            assert_eq!(hashmap.get(&k), Some(&k));
        }
    }

    #[test]
    fn into_iter() {
        let mut hashmap: HashMap<usize, usize> = (0..64).map(|k| (k, k)).collect();
        for (_, v) in &mut hashmap {
            *v *= 2;
        }
        assert_eq!((&hashmap).into_iter().len(), 64);

        let mut owned: Vec<(usize, usize)> = hashmap.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(owned, (0..64).map(|k| (k, k * 2)).collect::<Vec<_>>());
    }

    #[test]
    fn compare() {
        let mut hashmap1: HashMap<String, usize> = HashMap::new();
        let mut hashmap2: HashMap<String, usize> = HashMap::with_capacity(3).unwrap();
        assert_eq!(hashmap1, hashmap2);

        hashmap1.put("Hi".to_string(), 1);
        assert_ne!(hashmap1, hashmap2);

        hashmap2.put("Hello".to_string(), 2);
        assert_ne!(hashmap1, hashmap2);

        hashmap1.put("Hello".to_string(), 2);
        assert_ne!(hashmap1, hashmap2);

        hashmap2.put("Hi".to_string(), 1);
        assert_eq!(hashmap1, hashmap2);

        hashmap1.put("Hi".to_string(), 3);
        assert_ne!(hashmap1, hashmap2);
    }

    #[test]
    fn display() {
        let mut hashmap: HashMap<&str, f64, Colliding> = HashMap::default();
        assert_eq!(hashmap.to_string(), "{[]}");
        hashmap.put("Vladislav", 7.0);
        hashmap.put("Rado", 35.1);
        assert_eq!(
            hashmap.to_string(),
            "{[[key=Vladislav, value=7], [key=Rado, value=35.1]]}"
        );
        assert_eq!(format!("{hashmap:?}"), r#"{"Vladislav": 7.0, "Rado": 35.1}"#);
    }

    #[test]
    fn string_key() {
        let mut hashmap1: HashMap<String, u32> = HashMap::default();
        let mut hashmap2: HashMap<u32, String> = HashMap::default();
        let mut checker1 = BTreeSet::new();
        let mut checker2 = BTreeSet::new();
        let mut runner = TestRunner::default();
        let test_size = 4096;
        for i in 0..test_size {
            let prop_str = "[a-z]{1,16}"
                .new_tree(&mut runner)
                .map(|t| t.current())
                .unwrap();
            if hashmap1.put_if_absent(prop_str.clone(), i).is_ok() {
                checker1.insert((prop_str.clone(), i));
            }
            let str_borrowed = prop_str.as_str();
            assert!(hashmap1.contains_key(str_borrowed));
            assert!(hashmap1.read(str_borrowed, |_, _| ()).is_some());

            if hashmap2.put_if_absent(i, prop_str.clone()).is_ok() {
                checker2.insert((i, prop_str.clone()));
            }
        }
        assert_eq!(hashmap1.len(), checker1.len());
        assert_eq!(hashmap2.len(), checker2.len());
        for iter in checker1 {
            let v = hashmap1.remove(iter.0.as_str());
            assert_eq!(v, Some(iter.1));
        }
        for iter in checker2 {
            let e = hashmap2.remove_entry(&iter.0);
            assert_eq!(e, Some(iter));
        }
        assert!(hashmap1.is_empty());
        assert!(hashmap2.is_empty());
    }

    #[test]
    fn map_trait() {
        fn fill(map: &mut dyn Map<String, usize>, n: usize) {
            for i in 0..n {
                assert!(map.put(i.to_string(), i).is_none());
            }
        }

        let mut chained: HashMap<String, usize> = HashMap::default();
        let mut std_map: std::collections::HashMap<String, usize, RandomState> =
            std::collections::HashMap::default();
        fill(&mut chained, 1000);
        fill(&mut std_map, 1000);

        let maps: [&mut dyn Map<String, usize>; 2] = [&mut chained, &mut std_map];
        for map in maps {
            assert_eq!(map.len(), 1000);
            assert_eq!(map.get(&"999".to_string()), Some(&999));
            assert_eq!(map.put("999".to_string(), 0), Some(999));
            assert_eq!(map.remove(&"0".to_string()), Some(0));
            assert!(!map.contains_key(&"0".to_string()));
            map.clear();
            assert!(map.is_empty());
        }
    }

    #[derive(Clone, Debug)]
    enum Op {
        Put(u8, u16),
        PutIfAbsent(u8, u16),
        Remove(u8),
        RemoveIfEq(u8, u16),
        Replace(u8, u16),
        ReplaceIfEq(u8, u16, u16),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let key = 0_u8..48;
        let val = 0_u16..8;
        prop_oneof![
            8 => (key.clone(), val.clone()).prop_map(|(k, v)| Op::Put(k, v)),
            2 => (key.clone(), val.clone()).prop_map(|(k, v)| Op::PutIfAbsent(k, v)),
            4 => key.clone().prop_map(Op::Remove),
            2 => (key.clone(), val.clone()).prop_map(|(k, v)| Op::RemoveIfEq(k, v)),
            2 => (key.clone(), val.clone()).prop_map(|(k, v)| Op::Replace(k, v)),
            2 => (key, val.clone(), val).prop_map(|(k, o, n)| Op::ReplaceIfEq(k, o, n)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[cfg_attr(miri, ignore)]
        #[test]
        fn model(capacity in 1_usize..32, ops in prop::collection::vec(op_strategy(), 0..256)) {
            let mut hashmap: HashMap<u8, u16> = HashMap::with_capacity(capacity).unwrap();
            let mut model: std::collections::HashMap<u8, u16> = std::collections::HashMap::new();
            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        prop_assert_eq!(hashmap.put(k, v), model.insert(k, v));
                    }
                    Op::PutIfAbsent(k, v) => {
                        let inserted = hashmap.put_if_absent(k, v).is_ok();
                        prop_assert_eq!(inserted, !model.contains_key(&k));
                        model.entry(k).or_insert(v);
                    }
                    Op::Remove(k) => {
                        prop_assert_eq!(hashmap.remove(&k), model.remove(&k));
                    }
                    Op::RemoveIfEq(k, v) => {
                        let expected = model.get(&k) == Some(&v);
                        if expected {
                            model.remove(&k);
                        }
                        prop_assert_eq!(hashmap.remove_if_eq(&k, &v), expected);
                    }
                    Op::Replace(k, v) => {
                        let expected = model.get_mut(&k).map(|old| std::mem::replace(old, v));
                        prop_assert_eq!(hashmap.replace(&k, v), expected);
                    }
                    Op::ReplaceIfEq(k, o, n) => {
                        let expected = model.get(&k) == Some(&o);
                        if expected {
                            model.insert(k, n);
                        }
                        prop_assert_eq!(hashmap.replace_if_eq(&k, &o, n), expected);
                    }
                    Op::Clear => {
                        hashmap.clear();
                        model.clear();
                    }
                }
                prop_assert_eq!(hashmap.len(), model.len());
            }
            assert_views_consistent(&hashmap);
            prop_assert_eq!(hashmap.capacity(), capacity);
            for (k, v) in &model {
                prop_assert_eq!(hashmap.get(k), Some(v));
                prop_assert!(hashmap.bucket_index(k) < capacity);
            }
        }

        #[cfg_attr(miri, ignore)]
        #[test]
        fn put_all_disjoint(xs in prop::collection::btree_set(any::<u32>(), 0..128), capacity in 1_usize..64) {
            let mut hashmap: HashMap<u32, u32> = HashMap::with_capacity(capacity).unwrap();
            let mut other: HashMap<u32, u32> = HashMap::default();
            for (i, x) in xs.iter().enumerate() {
                if i % 2 == 0 {
                    hashmap.put(*x, i as u32);
                } else {
                    other.put(*x, i as u32);
                }
            }
            let len_before = hashmap.len();
            hashmap.put_all(&other);
            prop_assert_eq!(hashmap.len(), len_before + other.len());
            prop_assert_eq!(hashmap.len(), xs.len());
            assert_views_consistent(&hashmap);
        }
    }

    #[test]
    fn random_unique_keys() {
        use rand::distr::{Alphanumeric, SampleString};

        let workload_size = 10_000;
        let mut rng = rand::rng();
        let mut hashmap: HashMap<String, usize> = HashMap::default();
        let mut keys = BTreeSet::new();
        while keys.len() < workload_size {
            keys.insert(Alphanumeric.sample_string(&mut rng, 24));
        }
        for (i, key) in keys.iter().enumerate() {
            assert!(hashmap.put(key.clone(), i).is_none());
        }
        assert_eq!(hashmap.len(), workload_size);
        assert!(!hashmap.is_empty());
        assert_eq!(hashmap.keys().len(), workload_size);
        assert_eq!(hashmap.entries().len(), workload_size);
        assert!(hashmap.load_factor() > 99.0);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(hashmap.get(key.as_str()), Some(&i));
        }
    }
}
